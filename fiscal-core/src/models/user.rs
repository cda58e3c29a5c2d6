use serde::{Deserialize, Serialize};

use super::de::id_from_string_or_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Taxpayer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Taxpayer => "taxpayer",
        }
    }
}

/// Peruvian identity document kind. DNI identifies a natural person,
/// RUC a registered taxpayer (business or independent professional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "DNI")]
    Dni,
    #[serde(rename = "RUC")]
    Ruc,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dni => "DNI",
            Self::Ruc => "RUC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: i64,
    pub username: String,
    /// Opaque credential, passed through to the store as-is.
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub document_type: DocumentType,
    pub document_number: String,
    pub email: String,
    pub address: String,
}

/// For creating new users (no id yet, the store assigns one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    pub document_type: DocumentType,
    pub document_number: String,
    pub email: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_store_shape() {
        let json = r#"{
            "id": "2",
            "username": "jperez",
            "password": "secret",
            "name": "Juan Pérez",
            "role": "taxpayer",
            "documentType": "DNI",
            "documentNumber": "45678912",
            "email": "jperez@example.com",
            "address": "Av. Arequipa 123, Lima"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.role, UserRole::Taxpayer);
        assert_eq!(user.document_type, DocumentType::Dni);
        assert_eq!(user.document_number, "45678912");
    }

    #[test]
    fn rejects_unknown_role() {
        let json = r#"{
            "id": 1,
            "username": "x",
            "password": "x",
            "name": "x",
            "role": "auditor",
            "documentType": "RUC",
            "documentNumber": "20123456789",
            "email": "x@example.com",
            "address": "x"
        }"#;

        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn document_type_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&DocumentType::Ruc).unwrap(), "\"RUC\"");
    }
}
