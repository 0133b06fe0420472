use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DashboardError;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("Invalid time regex"));

static ROLE_TEMPLATE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("Invalid role template name regex"));

static PERMISSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*:[a-z][a-z0-9_]*$").expect("Invalid permission regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填文本字段不能为空白
pub fn require_non_empty(field: &str, value: &str) -> Result<(), DashboardError> {
    if value.trim().is_empty() {
        return Err(DashboardError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// 24 小时制 HH:MM
pub fn validate_time_of_day(value: &str) -> Result<(), &'static str> {
    if !TIME_OF_DAY_RE.is_match(value) {
        return Err("Time must use the 24-hour HH:MM format");
    }
    Ok(())
}

pub fn validate_role_template_name(name: &str) -> Result<(), &'static str> {
    if name.len() > 64 {
        return Err("Role template name must be at most 64 characters");
    }
    if !ROLE_TEMPLATE_NAME_RE.is_match(name) {
        return Err(
            "Role template name must start with a lowercase letter and contain only lowercase letters, digits or underscores",
        );
    }
    Ok(())
}

/// 权限字符串格式：resource:action
pub fn validate_permission(permission: &str) -> Result<(), &'static str> {
    if !PERMISSION_RE.is_match(permission) {
        return Err("Permission must have the form resource:action");
    }
    Ok(())
}

const WEAK_PASSWORDS: &[&str] = &[
    "password1",
    "qwerty123",
    "admin1234",
    "welcome1",
    "letmein1",
    "abcd1234",
    "school123",
    "teacher1",
];

/// 密码需至少 8 位，同时包含大小写字母与数字，且不在常见弱密码列表中
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut missing = Vec::new();
    if password.chars().count() < 8 {
        missing.push("at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit");
    }
    if !missing.is_empty() {
        return Err(format!("Password must contain {}", missing.join(", ")));
    }
    if WEAK_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        return Err("Password is too common".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day() {
        assert!(validate_time_of_day("00:00").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("9:30").is_err());
    }

    #[test]
    fn test_role_template_rules() {
        assert!(validate_role_template_name("class_teacher").is_ok());
        assert!(validate_role_template_name("1teacher").is_err());
        assert!(validate_role_template_name("Teacher").is_err());
        assert!(validate_permission("gradebook:update").is_ok());
        assert!(validate_permission("gradebook").is_err());
        assert!(validate_permission("gradebook:update:all").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "7A").is_ok());
        assert!(require_non_empty("name", "  ").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Blackboard42").is_ok());
        assert!(validate_password("SecurePass123").is_ok());

        let err = validate_password("abc1").unwrap_err();
        assert!(err.contains("at least 8 characters"));
        assert!(err.contains("an uppercase letter"));
        assert!(!err.contains("a digit"));

        assert!(validate_password("ABCDEFGH1").is_err());
        assert_eq!(
            validate_password("School123").unwrap_err(),
            "Password is too common"
        );
    }

    #[test]
    fn test_username_and_email() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("ada").is_err());
        assert!(validate_username("ada lovelace").is_err());
        assert!(validate_email("ada@school.test").is_ok());
        assert!(validate_email("ada@school").is_err());
    }
}
