//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;

fn validate_email(email: &str) -> Result<(), UserError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!(
            "invalid email address: {email:?}"
        ))),
    }
}

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        Ok(User::new(id, params.name, params.email, params.role))
    }

    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    ///
    /// Roles are fixed at registration.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_create_rejects_bad_email() {
        let params = UserCreate {
            name: "Alice".into(),
            email: "alice.example.com".into(),
            role: Role::Customer,
        };
        let err = User::from_create_params(UserId(1), params).unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_is_all_or_nothing() {
        let mut user = User::new(UserId(1), "Alice", "alice@example.com", Role::Customer);
        let update = UserUpdate {
            name: Some("Alicia".into()),
            email: Some("broken".into()),
        };
        assert!(user.on_update(update, &()).await.is_err());
        assert_eq!(user.name, "Alice");
    }
}
