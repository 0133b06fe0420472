/// LIKE 转义字符
pub const LIKE_ESCAPE: char = '!';

/// 转义 LIKE 模式中的通配符，配合 `ESCAPE '!'` 使用
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 生成大小写不敏感的子串匹配模式（已转小写、已转义）
pub fn contains_pattern(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like_pattern(&trimmed.to_lowercase())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("7A"), "7A");
        assert_eq!(escape_like_pattern("100%"), "100!%");
        assert_eq!(escape_like_pattern("a_b!"), "a!_b!!");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("  Grade "), Some("%grade%".to_string()));
        assert_eq!(contains_pattern("   "), None);
    }
}
