use crate::domain::value_objects::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const CODE_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub id: Uuid,
    pub owner_id: UserId,
    pub code: String,
    pub max_uses: Option<u32>,
    pub uses: u32,
    pub expires_at: Option<DateTime<Utc>>,
    pub autofollow: bool,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    pub fn new(owner_id: UserId) -> Self {
        let mut code = Uuid::new_v4().simple().to_string();
        code.truncate(CODE_LENGTH);
        Self {
            id: Uuid::new_v4(),
            owner_id,
            code,
            max_uses: None,
            uses: 0,
            expires_at: None,
            autofollow: false,
            comment: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_max_uses(mut self, max_uses: u32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn expired(&self) -> bool {
        self.expires_at.map(|e| e <= Utc::now()).unwrap_or(false)
    }

    pub fn valid_for_use(&self) -> bool {
        self.max_uses.map(|max| self.uses < max).unwrap_or(true) && !self.expired()
    }

    pub fn expire(&mut self) {
        self.expires_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_invite_is_usable() {
        let invite = Invite::new(UserId::new());
        assert_eq!(invite.code.len(), CODE_LENGTH);
        assert!(!invite.expired());
        assert!(invite.valid_for_use());
    }

    #[test]
    fn exhausted_invite_is_not_usable() {
        let mut invite = Invite::new(UserId::new()).with_max_uses(100);
        invite.uses = 100;
        assert!(!invite.valid_for_use());
    }

    #[test]
    fn expiry_in_the_past_invalidates() {
        let invite = Invite::new(UserId::new()).with_expiry(Utc::now() - Duration::hours(1));
        assert!(invite.expired());
        assert!(!invite.valid_for_use());

        let invite = Invite::new(UserId::new()).with_expiry(Utc::now() + Duration::hours(1));
        assert!(!invite.expired());
    }

    #[test]
    fn expire_deactivates_immediately() {
        let mut invite = Invite::new(UserId::new()).with_max_uses(100);
        invite.expire();
        assert!(invite.expired());
        assert!(!invite.valid_for_use());
    }
}
