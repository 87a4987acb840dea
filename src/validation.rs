//! Input validation utilities.
//!
//! Validation is deliberately limited to required-field presence. Category
//! and the order fields are opaque strings whose content is never
//! interpreted beyond equality comparisons, so no format, length, or
//! character rules apply.

use crate::service::orders::NewOrder;
use crate::service::users::NewUser;

/// Validate a registration payload
pub fn validate_registration(new_user: &NewUser) -> Result<(), String> {
    require("Username", &new_user.username)?;
    require("Email", &new_user.email)?;
    require("Password", &new_user.password)?;
    require("Category", &new_user.category)?;
    Ok(())
}

/// Validate an order creation payload. Description and category are
/// required fields but may be empty strings.
pub fn validate_new_order(new_order: &NewOrder) -> Result<(), String> {
    require("Title", &new_order.title)?;
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> NewUser {
        NewUser {
            username: "testuser".to_string(),
            email: "testuser@example.com".to_string(),
            password: "testpassword".to_string(),
            category: "testcategory".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert_eq!(validate_registration(&valid_registration()), Ok(()));
    }

    #[test]
    fn test_registration_requires_every_field() {
        for field in ["Username", "Email", "Password", "Category"] {
            let mut reg = valid_registration();
            match field {
                "Username" => reg.username.clear(),
                "Email" => reg.email.clear(),
                "Password" => reg.password.clear(),
                _ => reg.category.clear(),
            }
            let err = validate_registration(&reg).unwrap_err();
            assert_eq!(err, format!("{field} is required"));
        }
    }

    #[test]
    fn test_order_requires_a_title() {
        let order = NewOrder {
            title: String::new(),
            description: "some description".to_string(),
            category: "testcategory".to_string(),
        };
        assert_eq!(
            validate_new_order(&order),
            Err("Title is required".to_string())
        );
    }

    #[test]
    fn test_order_description_and_category_may_be_empty() {
        let order = NewOrder {
            title: "Laptop".to_string(),
            description: String::new(),
            category: String::new(),
        };
        assert_eq!(validate_new_order(&order), Ok(()));
    }
}
