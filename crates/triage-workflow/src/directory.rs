//! 患者目录
//!
//! 按证件号查找患者档案的协作方接口，以及内存实现

use std::collections::HashMap;
use triage_core::validation::{
    parse_birth_date, validate_document_id, validate_email, validate_name,
};
use triage_core::{Patient, Result, TriageError};
use uuid::Uuid;

/// 患者目录协作方契约
///
/// 未知证件号通过返回 `None` 表示，查找本身永不失败。
pub trait PatientDirectory {
    /// 按证件号查找患者档案
    fn find(&self, document_id: &str) -> Option<Patient>;
}

/// 内存患者目录
///
/// 以证件号为键的患者档案表，登记时执行字段校验。
#[derive(Debug, Default)]
pub struct InMemoryPatientDirectory {
    patients: HashMap<String, Patient>,
}

impl InMemoryPatientDirectory {
    /// 创建空的患者目录
    pub fn new() -> Self {
        Self {
            patients: HashMap::new(),
        }
    }

    /// 登记新患者
    ///
    /// 校验姓名、证件号、邮箱和出生日期（dd/mm/yyyy），
    /// 证件号重复时返回验证错误。
    pub fn register(
        &mut self,
        document_id: &str,
        name: &str,
        email: &str,
        birth_date: &str,
    ) -> Result<Patient> {
        validate_name(name)?;
        validate_document_id(document_id)?;
        validate_email(email)?;
        let birth_date = parse_birth_date(birth_date)?;

        let document_id = document_id.trim().to_string();
        if self.patients.contains_key(&document_id) {
            return Err(TriageError::Validation(format!(
                "证件号 {} 已登记",
                document_id
            )));
        }

        let now = chrono::Utc::now();
        let patient = Patient {
            id: Uuid::new_v4(),
            document_id: document_id.clone(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            birth_date,
            created_at: now,
            updated_at: now,
        };

        self.patients.insert(document_id, patient.clone());

        tracing::info!("Registered patient {} ({})", patient.id, patient.name);
        Ok(patient)
    }

    /// 按内部ID查找患者档案
    pub fn find_by_id(&self, id: Uuid) -> Option<Patient> {
        self.patients.values().find(|p| p.id == id).cloned()
    }

    /// 已登记患者数
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl PatientDirectory for InMemoryPatientDirectory {
    fn find(&self, document_id: &str) -> Option<Patient> {
        self.patients.get(document_id.trim()).cloned()
    }
}
