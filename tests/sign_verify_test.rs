use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use predicates::prelude::*;

/// Run signet with given args in a temp directory.
fn signet() -> Command {
    cargo_bin_cmd!("signet")
}

/// Generate a keypair in `dir` and return the base64 public key.
fn generate_keypair(dir: &assert_fs::TempDir) -> String {
    signet()
        .current_dir(dir.path())
        .args(["keygen", "update.pub", "update.key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Public key written to"));

    let raw = std::fs::read(dir.path().join("update.pub")).unwrap();
    assert_eq!(raw.len(), 32);
    BASE64.encode(raw)
}

/// Write a trust configuration naming the given key.
fn write_trust_config(dir: &assert_fs::TempDir, key: &str, name: &str) {
    dir.child("signet.toml")
        .write_str(&format!(
            "[trust]\nkeys = [\n  {{ key = \"{key}\", name = \"{name}\" }},\n]\n"
        ))
        .unwrap();
}

#[test]
fn keygen_writes_both_halves() {
    let dir = assert_fs::TempDir::new().unwrap();
    generate_keypair(&dir);

    let private = std::fs::read(dir.path().join("update.key")).unwrap();
    assert_eq!(private.len(), 32);
}

#[test]
fn sign_then_verifysig_succeeds_for_trusted_key() {
    let dir = assert_fs::TempDir::new().unwrap();
    let pubkey = generate_keypair(&dir);
    write_trust_config(&dir, &pubkey, "release-bot");

    dir.child("payload.bin").write_binary(b"update contents").unwrap();

    signet()
        .current_dir(dir.path())
        .args(["sign", "payload.bin", "pkg.sud", "update.key", "1.2.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed 'payload.bin'"));

    signet()
        .current_dir(dir.path())
        .args(["verifysig", "pkg.sud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signature VALID"));
}

#[test]
fn verifysig_fails_for_untrusted_key() {
    let dir = assert_fs::TempDir::new().unwrap();
    generate_keypair(&dir);
    // Trust a *different* key than the one that signs.
    write_trust_config(&dir, &BASE64.encode([9u8; 32]), "somebody-else");

    dir.child("payload.bin").write_binary(b"update contents").unwrap();

    signet()
        .current_dir(dir.path())
        .args(["sign", "payload.bin", "pkg.sud", "update.key", "1.2.3"])
        .assert()
        .success();

    signet()
        .current_dir(dir.path())
        .args(["verifysig", "pkg.sud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown signing key"));
}

#[test]
fn flipping_one_byte_breaks_the_signature() {
    let dir = assert_fs::TempDir::new().unwrap();
    let pubkey = generate_keypair(&dir);
    write_trust_config(&dir, &pubkey, "release-bot");

    dir.child("payload.bin").write_binary(b"update contents").unwrap();
    signet()
        .current_dir(dir.path())
        .args(["sign", "payload.bin", "pkg.sud", "update.key", "1.2.3"])
        .assert()
        .success();

    let package = std::fs::read(dir.path().join("pkg.sud")).unwrap();

    // One flip in the signature, one in the version field, one in the payload.
    for position in [10usize, 70, package.len() - 3] {
        let mut tampered = package.clone();
        tampered[position] ^= 0x01;
        std::fs::write(dir.path().join("tampered.sud"), &tampered).unwrap();

        signet()
            .current_dir(dir.path())
            .args(["verifysig", "tampered.sud"])
            .assert()
            .failure();
    }
}

#[test]
fn showversion_prints_header_version() {
    let dir = assert_fs::TempDir::new().unwrap();
    generate_keypair(&dir);

    dir.child("payload.bin").write_binary(b"x").unwrap();
    signet()
        .current_dir(dir.path())
        .args(["sign", "payload.bin", "pkg.sud", "update.key", "2.7.0"])
        .assert()
        .success();

    signet()
        .current_dir(dir.path())
        .args(["showversion", "pkg.sud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: 2.7.0"));
}

#[test]
fn showversion_fails_on_truncated_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("short.sud").write_binary(&[0u8; 50]).unwrap();

    signet()
        .current_dir(dir.path())
        .args(["showversion", "short.sud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Truncated or corrupt"));
}

#[test]
fn showversion_fails_on_missing_file() {
    let dir = assert_fs::TempDir::new().unwrap();

    signet()
        .current_dir(dir.path())
        .args(["showversion", "nope.sud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn long_version_is_truncated_to_field_width() {
    let dir = assert_fs::TempDir::new().unwrap();
    generate_keypair(&dir);

    dir.child("payload.bin").write_binary(b"x").unwrap();
    signet()
        .current_dir(dir.path())
        .args([
            "sign",
            "payload.bin",
            "pkg.sud",
            "update.key",
            "1.2.3-nightly-20260806",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("truncated"));

    // 16 bytes survive: "1.2.3-nightly-20"
    signet()
        .current_dir(dir.path())
        .args(["showversion", "pkg.sud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: 1.2.3-nightly-20"))
        .stdout(predicate::str::contains("1.2.3-nightly-20260806").not());
}

#[test]
fn sign_with_missing_key_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("payload.bin").write_binary(b"x").unwrap();

    signet()
        .current_dir(dir.path())
        .args(["sign", "payload.bin", "pkg.sud", "missing.key", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
