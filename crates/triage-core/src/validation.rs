//! 患者字段校验工具
//!
//! 登记患者档案前对姓名、证件号、邮箱和出生日期做格式校验。

use chrono::{NaiveDate, Utc};

use crate::error::{Result, TriageError};

/// 证件号固定长度（11位数字）
const DOCUMENT_ID_LEN: usize = 11;

/// 校验患者姓名：非空白，只允许字母和空格
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TriageError::Validation("姓名不能为空".to_string()));
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(TriageError::Validation("姓名包含无效字符".to_string()));
    }
    Ok(())
}

/// 校验证件号：必须是11位数字
pub fn validate_document_id(document_id: &str) -> Result<()> {
    let trimmed = document_id.trim();
    if trimmed.len() != DOCUMENT_ID_LEN || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(TriageError::Validation("证件号无效，应为11位数字".to_string()));
    }
    Ok(())
}

/// 校验邮箱：形如 local@domain，且域名部分含有点号
pub fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok {
        return Err(TriageError::Validation("邮箱格式无效".to_string()));
    }
    Ok(())
}

/// 解析并校验出生日期（dd/mm/yyyy），不接受未来日期
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .map_err(|_| TriageError::Validation("出生日期无效".to_string()))?;

    if date > Utc::now().date_naive() {
        return Err(TriageError::Validation("出生日期不能是未来日期".to_string()));
    }
    Ok(date)
}
