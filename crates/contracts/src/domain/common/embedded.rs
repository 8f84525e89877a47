use serde::{Deserialize, Serialize};

/// Related row embedded by name, e.g. `"customers": {"name": "ABC Corp"}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Employee columns embedded into attendance rows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    pub employee_code: String,
    pub name: String,
    pub department: String,
    pub status: String,
}
