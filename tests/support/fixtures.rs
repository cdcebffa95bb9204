//! Test fixtures and constants.

/// Fake age: prints its argument zero, then each argument on its own line.
///
/// Exits with `$FAKE_AGE_EXIT` (default 0). Echoes one stdin line when
/// `$FAKE_AGE_READ` is set and `$FAKE_AGE_ENV` when present.
pub const FAKE_AGE: &str = r#"#!/bin/sh
printf 'argv0=%s\n' "$0"
for a in "$@"; do
    printf 'arg=%s\n' "$a"
done
if [ -n "$FAKE_AGE_READ" ]; then
    read -r line
    printf 'stdin=%s\n' "$line"
fi
if [ -n "$FAKE_AGE_ENV" ]; then
    printf 'env=%s\n' "$FAKE_AGE_ENV"
fi
exit "${FAKE_AGE_EXIT:-0}"
"#;

/// Primary key published for alice.
pub const ALICE_KEY: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl alice";

/// Listing for alice: two keys, first one wins.
pub const ALICE_KEYS: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl alice\nssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC7 alice-rsa\n";

/// Single key published for bob.
pub const BOB_KEY: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIHsKLqeplhpuf0ORf0hUd2Xu9M31HN8dHMBVlSW9F8Zb bob";

/// An age native recipient, passed through untouched.
pub const AGE_RECIPIENT: &str = "age1ql3z7hjy54pw3hyww5ayyfg7zqgvc7w3j2elw8zmrj2kg5sfn9aqmcac8p";
