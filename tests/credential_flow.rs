use std::time::Duration;

use studypalz::store::{
    CredentialStore, ErrorKind, HashingParams, LoginError, RegisterError, SqliteCredentialStore,
    StoreConfig,
};

fn fresh_store() -> (tempfile::TempDir, SqliteCredentialStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SqliteCredentialStore::new(StoreConfig {
        path: dir.path().join("studypalz.db"),
        busy_timeout: Duration::from_secs(1),
        hashing: HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
    });
    store.initialize().expect("initialize");
    (dir, store)
}

#[test]
fn alice_registers_logs_in_and_cannot_register_twice() {
    let (_dir, store) = fresh_store();

    store
        .register("alice", "alice@example.com", "pw123", "11th Grade")
        .expect("first registration succeeds");

    store.login("alice", "pw123").expect("correct password logs in");

    let wrong = store.login("alice", "wrongpw").unwrap_err();
    assert!(matches!(wrong, LoginError::InvalidCredentials));

    let dup = store
        .register("alice", "other@example.com", "pw456", "12th Grade")
        .unwrap_err();
    assert!(matches!(dup, RegisterError::Duplicate));
    assert_eq!(dup.kind(), ErrorKind::Duplicate);
}

#[test]
fn many_accounts_each_log_in_with_their_own_password() {
    let (_dir, store) = fresh_store();
    let accounts = [
        ("amy", "amy@school.edu", "a-pass", "11th Grade"),
        ("ben", "ben@school.edu", "b-pass", "12th Grade"),
        ("cat", "cat@uni.ac.uk", "c-pass", "1st Year"),
    ];

    for (user, email, pw, class) in accounts {
        store.register(user, email, pw, class).unwrap();
    }
    for (user, _, pw, _) in accounts {
        assert!(store.login(user, pw).is_ok(), "{} should log in", user);
    }
    assert!(store.login("amy", "b-pass").is_err());
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn store_state_persists_across_instances() {
    let (dir, store) = fresh_store();
    store
        .register("alice", "alice@example.com", "pw123", "1st Year")
        .unwrap();
    drop(store);

    let reopened = SqliteCredentialStore::new(StoreConfig {
        path: dir.path().join("studypalz.db"),
        busy_timeout: Duration::from_secs(1),
        hashing: HashingParams::default(),
    });
    reopened.initialize().unwrap();

    assert!(reopened.login("alice", "pw123").is_ok());
    assert!(matches!(
        reopened.register("bob", "alice@example.com", "x", "1st Year"),
        Err(RegisterError::Duplicate)
    ));
}
