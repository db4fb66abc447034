pub const NAME_MAX_CHARS: usize = 100;
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 10;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 名称长度校验：1 <= x <= 100（按字符计）
    if name.is_empty() {
        return Err("Must not be empty");
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err("Must be at most 100 characters long");
    }
    Ok(())
}

pub fn validate_score(score: i32) -> Result<(), &'static str> {
    // 分数范围校验：0 <= x <= 10
    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err("Must be between 0 and 10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Programación").is_ok());
        assert!(validate_name("x").is_ok());
        assert!(validate_name(&"á".repeat(100)).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_overlong_name() {
        assert!(validate_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0).is_ok());
        assert!(validate_score(10).is_ok());
        assert!(validate_score(-1).is_err());
        assert!(validate_score(11).is_err());
    }
}
