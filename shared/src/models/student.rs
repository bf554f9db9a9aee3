//! Student Model
//!
//! Students always belong to a branch (`branch_id` foreign key). Optional
//! profile fields serialize as `null` when unset; on input, `null` and
//! absent are equivalent.

use serde::{Deserialize, Serialize};

/// Student entity (学生)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Student {
    /// Store-generated identifier
    pub id: i64,
    /// Owning branch id
    pub branch_id: i64,
    /// Full name, non-empty
    pub name: String,
    pub address: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub aadhar_number: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image_url: Option<String>,
    pub aadhar_image_url: Option<String>,
    pub religion: Option<String>,
    pub food_preference: Option<String>,
    pub gender: Option<String>,
    /// Monthly fee, non-negative, defaults to 0
    pub fee: f64,
    /// Creation timestamp (milliseconds since epoch)
    pub created_at: i64,
    /// Last update timestamp (milliseconds since epoch)
    pub updated_at: i64,
}

/// Student row joined with its branch name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StudentWithBranch {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub student: Student,
    /// Name of the owning branch
    #[serde(rename = "branchName")]
    pub branch_name: String,
}

/// Payload for creating a student
///
/// `branchId` and `name` are declared optional so their absence surfaces as
/// a field-specific validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreate {
    pub branch_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub aadhar_number: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image_url: Option<String>,
    pub aadhar_image_url: Option<String>,
    pub religion: Option<String>,
    pub food_preference: Option<String>,
    pub gender: Option<String>,
    pub fee: Option<f64>,
}

/// Payload for partially updating a student
///
/// Omitted (or null) fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    pub branch_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub aadhar_number: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image_url: Option<String>,
    pub aadhar_image_url: Option<String>,
    pub religion: Option<String>,
    pub food_preference: Option<String>,
    pub gender: Option<String>,
    pub fee: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student {
            id: 1,
            branch_id: 2,
            name: "Asha".to_string(),
            address: Some("12 Lake Road".to_string()),
            father_name: None,
            mother_name: None,
            aadhar_number: None,
            phone_number: Some("9876543210".to_string()),
            profile_image_url: None,
            aadhar_image_url: None,
            religion: None,
            food_preference: Some("veg".to_string()),
            gender: Some("female".to_string()),
            fee: 12000.0,
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_student_serializes_camel_case() {
        let json = serde_json::to_value(sample_student()).unwrap();
        assert_eq!(json["branchId"], 2);
        assert_eq!(json["fatherName"], serde_json::Value::Null);
        assert_eq!(json["phoneNumber"], "9876543210");
        assert_eq!(json["foodPreference"], "veg");
        assert!(json.get("branch_id").is_none());
    }

    #[test]
    fn test_student_with_branch_flattens() {
        let with_branch = StudentWithBranch {
            student: sample_student(),
            branch_name: "North Wing".to_string(),
        };

        let json = serde_json::to_value(&with_branch).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["branchName"], "North Wing");
        assert!(json.get("student").is_none());
    }

    #[test]
    fn test_student_update_null_equals_absent() {
        let explicit: StudentUpdate =
            serde_json::from_str(r#"{"address":null,"fee":12000}"#).unwrap();
        let omitted: StudentUpdate = serde_json::from_str(r#"{"fee":12000}"#).unwrap();

        assert!(explicit.address.is_none());
        assert!(omitted.address.is_none());
        assert_eq!(explicit.fee, Some(12000.0));
    }

    #[test]
    fn test_student_create_accepts_minimal_payload() {
        let payload: StudentCreate =
            serde_json::from_str(r#"{"branchId":1,"name":"Asha"}"#).unwrap();
        assert_eq!(payload.branch_id, Some(1));
        assert_eq!(payload.name.as_deref(), Some("Asha"));
        assert!(payload.fee.is_none());
    }
}
