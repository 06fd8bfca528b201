use heavyweight::heavyweight_core::password::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_empty() {
    let hash = hash_password("").unwrap();

    assert!(verify_password("", &hash).unwrap());
    assert!(!verify_password(" ", &hash).unwrap());
}

#[test]
fn test_hash_password_unicode() {
    let password = "pässwörd-密码-🔐";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_same_password_different_salts() {
    let first = hash_password("samepassword").unwrap();
    let second = hash_password("samepassword").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("samepassword", &first).unwrap());
    assert!(verify_password("samepassword", &second).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword").unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
    assert!(!verify_password("Correctpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    assert!(verify_password("testpassword", "not_a_valid_argon2_hash").is_err());
    assert!(verify_password("testpassword", "").is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_hashing_on_blocking_pool() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            tokio::spawn(async move {
                let password = format!("password-{i}");
                let hash = hash_password_blocking(password.clone()).await.unwrap();
                verify_password_blocking(password, hash).await.unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
