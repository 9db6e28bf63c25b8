//! Profile slots kept in the store (`user_<id>` and `currentUser`).

use super::types::{partner_id, Theme, UserProfile};
use crate::core::constants::{CURRENT_USER_KEY, FIRST_USER_ID, SECOND_USER_ID, USER_KEY_PREFIX};
use crate::store::{load_json, save_json, KeyValueStore};
use std::io;

fn user_key(id: &str) -> String {
    format!("{}{}", USER_KEY_PREFIX, id)
}

pub fn load_profile(store: &dyn KeyValueStore, id: &str) -> Option<UserProfile> {
    load_json(store, &user_key(id))
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &UserProfile) -> io::Result<()> {
    save_json(store, &user_key(&profile.id), profile)
}

/// Registered users in slot order.
pub fn registered_profiles(store: &dyn KeyValueStore) -> Vec<UserProfile> {
    [FIRST_USER_ID, SECOND_USER_ID]
        .iter()
        .filter_map(|id| load_profile(store, id))
        .collect()
}

/// Register a new user in the first free slot.
///
/// The first registration becomes "Keychain", the second "Bug". Fails with
/// `AlreadyExists` once both slots are taken and `InvalidInput` for a blank
/// name.
pub fn register_profile(
    store: &dyn KeyValueStore,
    name: &str,
    email: &str,
    avatar: &str,
    theme: Theme,
) -> io::Result<UserProfile> {
    let name = name.trim();
    if name.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Name cannot be empty",
        ));
    }

    let id = match registered_profiles(store).len() {
        0 => FIRST_USER_ID,
        1 if load_profile(store, SECOND_USER_ID).is_none() => SECOND_USER_ID,
        1 => FIRST_USER_ID,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "Both garden slots are taken",
            ))
        }
    };

    let profile = UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        theme,
        email: email.trim().to_string(),
    };
    save_profile(store, &profile)?;
    log::info!("Registered {} as {}", profile.name, profile.id);
    Ok(profile)
}

pub fn current_user(store: &dyn KeyValueStore) -> Option<UserProfile> {
    load_json(store, CURRENT_USER_KEY)
}

pub fn set_current_user(store: &dyn KeyValueStore, profile: &UserProfile) -> io::Result<()> {
    save_json(store, CURRENT_USER_KEY, profile)
}

pub fn sign_out(store: &dyn KeyValueStore) -> io::Result<()> {
    store.remove(CURRENT_USER_KEY)
}

/// Whether the other slot has been registered.
pub fn has_partner(store: &dyn KeyValueStore, user: &UserProfile) -> bool {
    load_profile(store, partner_id(&user.id)).is_some()
}

/// The other user, or a placeholder if they never registered.
pub fn partner_of(store: &dyn KeyValueStore, user: &UserProfile) -> UserProfile {
    let id = partner_id(&user.id);
    load_profile(store, id).unwrap_or_else(|| UserProfile::placeholder(id))
}

/// Advance the user's theme and persist it to both their slot and the session.
pub fn cycle_theme(store: &dyn KeyValueStore, user: &mut UserProfile) -> io::Result<()> {
    user.theme = user.theme.next();
    save_profile(store, user)?;
    set_current_user(store, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_first_registration_is_keychain_second_is_bug() {
        let store = MemoryStore::new();
        let first = register_profile(&store, "Ava", "", "🐰", Theme::Immy).unwrap();
        let second = register_profile(&store, "Ben", "ben@example.com", "🐨", Theme::Light).unwrap();

        assert_eq!(first.id, "Keychain");
        assert_eq!(second.id, "Bug");
        assert_eq!(registered_profiles(&store).len(), 2);
    }

    #[test]
    fn test_third_registration_fails() {
        let store = MemoryStore::new();
        register_profile(&store, "Ava", "", "🐰", Theme::Immy).unwrap();
        register_profile(&store, "Ben", "", "🐨", Theme::Light).unwrap();
        let err = register_profile(&store, "Cy", "", "🦊", Theme::Dark).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = MemoryStore::new();
        let err = register_profile(&store, "   ", "", "🐰", Theme::Immy).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_partner_falls_back_to_placeholder() {
        let store = MemoryStore::new();
        let ava = register_profile(&store, "Ava", "", "🐰", Theme::Immy).unwrap();
        let partner = partner_of(&store, &ava);
        assert_eq!(partner.id, "Bug");
        assert_eq!(partner.name, "Bug");

        let ben = register_profile(&store, "Ben", "", "🐨", Theme::Light).unwrap();
        assert_eq!(partner_of(&store, &ava), ben);
    }

    #[test]
    fn test_current_user_roundtrip_and_sign_out() {
        let store = MemoryStore::new();
        let ava = register_profile(&store, "Ava", "", "🐰", Theme::Immy).unwrap();
        assert!(current_user(&store).is_none());

        set_current_user(&store, &ava).unwrap();
        assert_eq!(current_user(&store), Some(ava));

        sign_out(&store).unwrap();
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn test_cycle_theme_persists() {
        let store = MemoryStore::new();
        let mut ava = register_profile(&store, "Ava", "", "🐰", Theme::Light).unwrap();
        cycle_theme(&store, &mut ava).unwrap();

        assert_eq!(ava.theme, Theme::Dark);
        assert_eq!(load_profile(&store, "Keychain").unwrap().theme, Theme::Dark);
        assert_eq!(current_user(&store).unwrap().theme, Theme::Dark);
    }
}
