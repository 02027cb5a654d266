//! Access & pause control: admin identity, optional pause guardian, and
//! the global pause flag.
//!
//! Every mutating entry point consults this state first. Administrative
//! operations bypass the pause guard so emergency administration stays
//! possible while paused.

use serde::{Deserialize, Serialize};

use ledgerid_core::Principal;

use crate::error::{RegistryError, Result};

/// Singleton access/pause state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessState {
    admin: Principal,
    pause_guardian: Option<Principal>,
    paused: bool,
}

impl AccessState {
    /// Initialize with the deploying principal as admin, no guardian,
    /// unpaused.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            pause_guardian: None,
            paused: false,
        }
    }

    /// The current admin.
    pub fn admin(&self) -> Principal {
        self.admin
    }

    /// The current pause guardian, if any.
    pub fn pause_guardian(&self) -> Option<Principal> {
        self.pause_guardian
    }

    /// Whether the emergency pause is active.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Guard: fail with [`RegistryError::Paused`] while the pause is
    /// active.
    pub fn require_not_paused(&self) -> Result<()> {
        if self.paused {
            return Err(RegistryError::Paused);
        }
        Ok(())
    }

    /// Guard: fail unless the caller is the admin.
    pub fn require_admin(&self, caller: &Principal) -> Result<()> {
        if *caller != self.admin {
            return Err(RegistryError::NotAdmin(*caller));
        }
        Ok(())
    }

    /// Engage the pause. Admin or guardian only. Idempotent.
    pub fn pause(&mut self, caller: &Principal) -> Result<()> {
        let is_guardian = self.pause_guardian.as_ref() == Some(caller);
        if *caller != self.admin && !is_guardian {
            return Err(RegistryError::NotAdminOrGuardian(*caller));
        }
        self.paused = true;
        Ok(())
    }

    /// Lift the pause. Admin only; the guardian can trigger but not lift.
    pub fn unpause(&mut self, caller: &Principal) -> Result<()> {
        self.require_admin(caller)?;
        self.paused = false;
        Ok(())
    }

    /// Replace (or clear) the pause guardian. Admin only. Returns the
    /// previous guardian.
    pub fn set_pause_guardian(
        &mut self,
        caller: &Principal,
        guardian: Option<Principal>,
    ) -> Result<Option<Principal>> {
        self.require_admin(caller)?;
        Ok(std::mem::replace(&mut self.pause_guardian, guardian))
    }

    /// Transfer the admin role. Admin only; transferring to oneself is
    /// rejected. Returns the previous admin.
    pub fn set_admin(&mut self, caller: &Principal, new_admin: Principal) -> Result<Principal> {
        self.require_admin(caller)?;
        if new_admin == *caller {
            return Err(RegistryError::SelfAdminTransfer);
        }
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }
}
