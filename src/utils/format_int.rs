/// Integer displayed with `'` between groups of three digits.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                result.push('\'');
            }
            result.push(c);
        }
        f.write_str(&result)
    }
}
