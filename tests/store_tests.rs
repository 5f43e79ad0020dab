use passgen_vault::core::{AppState, LoginGate, StateError, StoreError};
use passgen_vault::{GenerationOptions, Password, PasswordGenerator, PasswordStore};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_delete_at_removes_exactly_one(
        values in proptest::collection::vec("[a-z]{1,8}", 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = PasswordStore::new();
        for v in &values {
            store.save(Password::from(v.as_str())).unwrap();
        }

        let index = pick.index(values.len());
        let removed = store.delete_at(index).unwrap();
        prop_assert_eq!(removed.as_str(), values[index].as_str());

        let mut expected = values.clone();
        expected.remove(index);
        let remaining: Vec<String> = store.list().iter().map(|p| p.as_str().to_string()).collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn prop_delete_all_always_empties(values in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut store = PasswordStore::new();
        for v in &values {
            store.save(Password::from(v.as_str())).unwrap();
        }
        prop_assert_eq!(store.delete_all(), values.len());
        prop_assert!(store.list().is_empty());
    }

    #[test]
    fn prop_invalid_index_fails(len in 0..10usize, extra in 0..10usize) {
        let mut store = PasswordStore::new();
        for i in 0..len {
            store.save(Password::from(format!("pw{}", i))).unwrap();
        }
        let result = store.delete_at(len + extra);
        prop_assert_eq!(result, Err(StoreError::IndexOutOfRange { index: len + extra, len }));
        prop_assert_eq!(store.len(), len);
    }
}

#[test]
fn login_generate_save_delete_flow() {
    let mut gate = LoginGate::with_seed(10);
    let mut state = AppState::new(PasswordGenerator::with_seed(10), GenerationOptions::default());

    let code = gate.captcha().to_string();
    let identity = gate.attempt("Grace", &code).unwrap();
    state.sign_in(identity);
    assert_eq!(state.identity().map(|i| i.name.as_str()), Some("Grace"));

    assert_eq!(state.save_current(), Err(StateError::Store(StoreError::NoPassword)));

    state.toggle_uppercase();
    state.set_length(8);
    let first = state.generate().unwrap().clone();
    state.save_current().unwrap();
    let second = state.generate().unwrap().clone();
    state.save_current().unwrap();

    assert_eq!(state.saved(), &[first.clone(), second.clone()]);
    assert_eq!(state.saved().last(), Some(&second));

    state.delete_saved(0).unwrap();
    assert_eq!(state.saved(), &[second]);

    assert_eq!(state.delete_all_saved(), 1);
    assert!(state.saved().is_empty());
}
