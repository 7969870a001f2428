//! Local account store.
//!
//! Keyward keeps a single account profile as a JSON file under the data
//! directory. The master password itself is never stored; `unlock` verifies
//! candidates against its Argon2id hash (a PHC string).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use async_trait::async_trait;
use keyward_core::{Account, AccountError, Profile, Settings, SettingsUpdate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredProfile {
    name: String,
    email: String,
    password_hash: String,
    #[serde(default)]
    settings: Settings,
}

/// File-backed [`Account`] implementation.
///
/// Credential mutations (`change_password`, `delete`) require a prior
/// successful `unlock` in this session.
pub struct LocalAccount {
    path: PathBuf,
    profile: Mutex<StoredProfile>,
    unlocked: AtomicBool,
}

impl LocalAccount {
    /// File name of the profile inside the data directory.
    pub const PROFILE_FILE: &'static str = "profile.json";

    fn profile_path(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::PROFILE_FILE)
    }

    /// Open the profile stored under `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = Self::profile_path(data_dir);
        if !path.exists() {
            return Err(Error::NoProfile);
        }
        let data = fs::read(&path)?;
        let profile: StoredProfile = serde_json::from_slice(&data)?;
        Ok(Self {
            path,
            profile: Mutex::new(profile),
            unlocked: AtomicBool::new(false),
        })
    }

    /// Create a fresh profile under `data_dir`, hashing `password`.
    ///
    /// Refuses to overwrite an existing profile.
    pub fn create(data_dir: &Path, name: &str, email: &str, password: &str) -> Result<Self> {
        let path = Self::profile_path(data_dir);
        if path.exists() {
            return Err(Error::ProfileExists(path.display().to_string()));
        }
        fs::create_dir_all(data_dir)?;
        let profile = StoredProfile {
            name: name.into(),
            email: email.into(),
            password_hash: hash_password(password)?,
            settings: Settings::default(),
        };
        let account = Self {
            path,
            profile: Mutex::new(profile.clone()),
            unlocked: AtomicBool::new(false),
        };
        account.persist(&profile)?;
        log::info!("created account profile at {}", account.path.display());
        Ok(account)
    }

    fn persist(&self, profile: &StoredProfile) -> Result<()> {
        let data = serde_json::to_vec_pretty(profile)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn lock_profile(&self) -> keyward_core::Result<MutexGuard<'_, StoredProfile>> {
        self.profile
            .lock()
            .map_err(|_| AccountError::Storage("profile lock poisoned".into()))
    }

    fn require_unlocked(&self) -> keyward_core::Result<()> {
        if self.unlocked.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AccountError::NotLoggedIn)
        }
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn storage_err(err: impl std::fmt::Display) -> AccountError {
    AccountError::Storage(err.to_string())
}

#[async_trait]
impl Account for LocalAccount {
    async fn profile(&self) -> keyward_core::Result<Profile> {
        let profile = self.lock_profile()?;
        Ok(Profile {
            name: profile.name.clone(),
            email: profile.email.clone(),
        })
    }

    async fn unlock(&self, password: &str) -> keyward_core::Result<()> {
        let hash = self.lock_profile()?.password_hash.clone();
        if verify_password(password, &hash).map_err(storage_err)? {
            self.unlocked.store(true, Ordering::SeqCst);
            Ok(())
        } else {
            Err(AccountError::WrongPassword)
        }
    }

    async fn change_password(&self, new_password: &str) -> keyward_core::Result<()> {
        self.require_unlocked()?;
        let hash = hash_password(new_password).map_err(storage_err)?;
        let snapshot = {
            let mut profile = self.lock_profile()?;
            profile.password_hash = hash;
            profile.clone()
        };
        self.persist(&snapshot).map_err(storage_err)
    }

    async fn delete(&self) -> keyward_core::Result<()> {
        self.require_unlocked()?;
        fs::remove_file(&self.path).map_err(storage_err)?;
        self.unlocked.store(false, Ordering::SeqCst);
        log::info!("deleted account profile at {}", self.path.display());
        Ok(())
    }

    async fn rename(&self, name: &str) -> keyward_core::Result<()> {
        let snapshot = {
            let mut profile = self.lock_profile()?;
            profile.name = name.into();
            profile.clone()
        };
        self.persist(&snapshot).map_err(storage_err)
    }

    async fn logout(&self) -> keyward_core::Result<()> {
        self.unlocked.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn settings(&self) -> keyward_core::Result<Settings> {
        Ok(self.lock_profile()?.settings.clone())
    }

    async fn set_settings(&self, update: SettingsUpdate) -> keyward_core::Result<Settings> {
        let (snapshot, effective) = {
            let mut profile = self.lock_profile()?;
            profile.settings.apply(&update);
            (profile.clone(), profile.settings.clone())
        };
        self.persist(&snapshot).map_err(storage_err)?;
        Ok(effective)
    }
}
