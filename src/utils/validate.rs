use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::work_categories::requests::RequirementPayload;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 -]{6,18}[0-9]$").expect("Invalid phone regex"));

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

pub fn validate_phone_number(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// 校验工作类别及其要求列表
///
/// 规则：
/// - 类别名称非空，max_percentage 在 (0, 100] 区间
/// - 至少一条要求，且每条要求名称非空、max_percentage_increase >= 0
/// - 各要求 max_percentage_increase 之和不得超过类别的 max_percentage
pub fn validate_category_payload(
    name: &str,
    max_percentage: i32,
    requirements: &[RequirementPayload],
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Work category name must not be empty".to_string());
    }
    if max_percentage <= 0 || max_percentage > 100 {
        return Err("max_percentage must be between 1 and 100".to_string());
    }
    if requirements.is_empty() {
        return Err("A work category must declare at least one requirement".to_string());
    }

    let mut cap_sum: i64 = 0;
    for req in requirements {
        if req.name.trim().is_empty() {
            return Err("Requirement name must not be empty".to_string());
        }
        if req.max_percentage_increase < 0 {
            return Err(format!(
                "Requirement '{}' must have a non-negative max_percentage_increase",
                req.name
            ));
        }
        cap_sum += req.max_percentage_increase as i64;
    }

    if cap_sum > max_percentage as i64 {
        return Err(format!(
            "Requirement caps sum to {cap_sum}, exceeding the category cap of {max_percentage}"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, cap: i32) -> RequirementPayload {
        RequirementPayload {
            name: name.to_string(),
            description: None,
            max_percentage_increase: cap,
        }
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_category_payload_ok() {
        let reqs = vec![req("Publications", 10), req("Committee work", 5)];
        assert!(validate_category_payload("Teaching", 20, &reqs).is_ok());
    }

    #[test]
    fn test_category_cap_sum_exceeded() {
        let reqs = vec![req("Publications", 15), req("Committee work", 10)];
        let err = validate_category_payload("Teaching", 20, &reqs).unwrap_err();
        assert!(err.contains("exceeding the category cap"));
    }

    #[test]
    fn test_category_requires_a_requirement() {
        assert!(validate_category_payload("Teaching", 20, &[]).is_err());
    }

    #[test]
    fn test_category_increase_zero_ok_negative_rejected() {
        // 0 是合法的增幅（要求可以不加分），负数才拒绝
        let zero = vec![req("Publications", 10), req("Optional extra", 0)];
        assert!(validate_category_payload("Teaching", 20, &zero).is_ok());

        let negative = vec![req("Publications", -1)];
        let err = validate_category_payload("Teaching", 20, &negative).unwrap_err();
        assert!(err.contains("non-negative max_percentage_increase"));
    }

    #[test]
    fn test_phone_number() {
        assert!(validate_phone_number("+49 170 1234567").is_ok());
        assert!(validate_phone_number("not-a-phone").is_err());
    }
}
