use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use rsa_vault::rsa::PrimalityMode;
use rsa_vault::{
    FileCryptoWorkflow, FileRecord, JsonRecordStore, MemoryRecordStore, RecordStore, VaultConfig,
    VaultError,
};

struct Fixture {
    dir: TempDir,
    config: VaultConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("encrypted");
        fs::create_dir(&out).unwrap();
        let config = VaultConfig::new(out);
        Self { dir, config }
    }

    fn source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn out_dir(&self) -> &Path {
        self.config.output_dir()
    }
}

fn record(name: &str, location: &Path) -> FileRecord {
    FileRecord {
        file_name: name.to_string(),
        location: location.to_string_lossy().into_owned(),
        n: "3233".to_string(),
        e: "17".to_string(),
        d: "2753".to_string(),
    }
}

// Every code is below the smallest modulus a key can have (2 * 3), so these
// round trip under any generated key.
const LOW_CODE_TEXT: &str = "\u{0}\u{1}\u{2}\u{3}\u{4}\u{5}\u{3}\u{1}";

fn modulus_of(store: &dyn RecordStore, name: &str) -> BigUint {
    let rec = store.find_one_by_name(name).unwrap().unwrap();
    rec.n.parse().unwrap()
}

// ── Round trip ───────────────────────────────────────────────────

#[test]
fn encrypt_then_decrypt_round_trips() {
    let fx = Fixture::new();
    let source = fx.source("plan.txt", LOW_CODE_TEXT);
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    for seed in 0..5 {
        store.delete_by_name("plan.txt").unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        workflow.encrypt_file_with_rng(&source, &mut rng).unwrap();

        assert!(modulus_of(&store, "plan.txt") > BigUint::from(5u32));
        assert_eq!(workflow.decrypt_file("plan.txt").unwrap(), LOW_CODE_TEXT);
    }
}

#[test]
fn round_trip_through_json_store() {
    let fx = Fixture::new();
    let store_path = fx.dir.path().join("records.json");
    let source = fx.source("diary.txt", LOW_CODE_TEXT);

    {
        let store = JsonRecordStore::open(&store_path);
        let workflow = FileCryptoWorkflow::new(&fx.config, &store);
        let mut rng = StdRng::seed_from_u64(99);
        let report = workflow.encrypt_file_with_rng(&source, &mut rng).unwrap();
        assert!(report.record_added);
    }

    // A fresh handle sees the persisted record
    let store = JsonRecordStore::open(&store_path);
    let rec = store.find_one_by_name("diary.txt").unwrap().unwrap();
    assert_eq!(PathBuf::from(&rec.location), fx.out_dir().join("diary.txt"));

    let workflow = FileCryptoWorkflow::new(&fx.config, &store);
    assert_eq!(workflow.decrypt_file("diary.txt").unwrap(), LOW_CODE_TEXT);
}

#[test]
fn known_key_decrypts_handwritten_ciphertext() {
    let fx = Fixture::new();
    // 'A' under n = 3233, e = 17
    let location = fx.out_dir().join("a.txt");
    fs::write(&location, "2790,2790").unwrap();
    let store = MemoryRecordStore::with_records(vec![record("a.txt", &location)]);
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    assert_eq!(workflow.decrypt_file("a.txt").unwrap(), "AA");
}

#[test]
fn miller_rabin_mode_round_trips() {
    let fx = Fixture::new();
    let config = fx.config.clone().with_primality(PrimalityMode::MillerRabin);
    let source = fx.source("mr.txt", LOW_CODE_TEXT);
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&config, &store);

    let mut rng = StdRng::seed_from_u64(4);
    workflow.encrypt_file_with_rng(&source, &mut rng).unwrap();
    assert!(modulus_of(&store, "mr.txt") > BigUint::from(5u32));
    assert_eq!(workflow.decrypt_file("mr.txt").unwrap(), LOW_CODE_TEXT);
}

// ── Encryption failures ──────────────────────────────────────────

#[test]
fn missing_source_has_no_side_effects() {
    let fx = Fixture::new();
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);
    let missing = fx.dir.path().join("ghost.txt");

    let err = workflow.encrypt_file(&missing).unwrap_err();
    assert!(matches!(err, VaultError::SourceNotFound(p) if p == missing));
    assert!(store.records().unwrap().is_empty());
    assert_eq!(fs::read_dir(fx.out_dir()).unwrap().count(), 0);
}

#[test]
fn directory_as_source_is_rejected() {
    let fx = Fixture::new();
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let err = workflow.encrypt_file(fx.dir.path()).unwrap_err();
    assert!(matches!(err, VaultError::SourceNotFound(_)));
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn invalid_output_dir_aborts_every_command() {
    let fx = Fixture::new();
    let config = VaultConfig::new(fx.dir.path().join("not-there"));
    let source = fx.source("x.txt", "x");
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&config, &store);

    assert!(matches!(workflow.encrypt_file(&source), Err(VaultError::ConfigInvalid(_))));
    assert!(matches!(workflow.decrypt_file("x.txt"), Err(VaultError::ConfigInvalid(_))));
    assert!(matches!(workflow.delete_record("x.txt"), Err(VaultError::ConfigInvalid(_))));
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn unreadable_source_persists_nothing() {
    let fx = Fixture::new();
    let source = fx.dir.path().join("binary.dat");
    fs::write(&source, [0xc3, 0x28, 0xff]).unwrap();
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let err = workflow.encrypt_file(&source).unwrap_err();
    assert!(matches!(err, VaultError::Io { .. }));
    assert!(store.records().unwrap().is_empty());
    assert!(!fx.out_dir().join("binary.dat").exists());
}

#[test]
fn duplicate_name_still_writes_ciphertext() {
    let fx = Fixture::new();
    let source = fx.source("dup.txt", "second version");
    let destination = fx.out_dir().join("dup.txt");
    let store = MemoryRecordStore::with_records(vec![record("dup.txt", &destination)]);
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let report = workflow.encrypt_file(&source).unwrap();
    assert!(!report.record_added);
    assert!(report.ciphertext_written);
    assert_eq!(report.destination, destination);

    // The old record (and its key) is kept; the file on disk is new
    assert_eq!(store.count_by_name("dup.txt").unwrap(), 1);
    assert_eq!(store.find_one_by_name("dup.txt").unwrap().unwrap().n, "3233");
    let written = fs::read_to_string(&destination).unwrap();
    assert_eq!(written.split(',').count(), "second version".chars().count());
}

#[test]
fn write_failure_is_reported_not_raised() {
    let fx = Fixture::new();
    let source = fx.source("blocked.txt", "abc");
    // A directory at the destination makes the write fail
    fs::create_dir(fx.out_dir().join("blocked.txt")).unwrap();
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let report = workflow.encrypt_file(&source).unwrap();
    assert!(report.record_added);
    assert!(!report.ciphertext_written);
    assert!(report.write_error.is_some());
    assert_eq!(store.count_by_name("blocked.txt").unwrap(), 1);
}

// ── Decryption failures ──────────────────────────────────────────

#[test]
fn ambiguous_name_aborts_before_reading_ciphertext() {
    let fx = Fixture::new();
    // Malformed content would surface if the file were read
    let location = fx.out_dir().join("twin.txt");
    fs::write(&location, "not,a,number").unwrap();
    let store = MemoryRecordStore::with_records(vec![
        record("twin.txt", &location),
        record("twin.txt", &location),
    ]);
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    match workflow.decrypt_file("twin.txt") {
        Err(VaultError::AmbiguousLookup { file_name, count }) => {
            assert_eq!(file_name, "twin.txt");
            assert_eq!(count, 2);
        }
        other => panic!("expected ambiguous lookup, got {other:?}"),
    }
}

#[test]
fn unknown_name_is_record_not_found() {
    let fx = Fixture::new();
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    assert!(matches!(
        workflow.decrypt_file("nobody.txt"),
        Err(VaultError::RecordNotFound(name)) if name == "nobody.txt"
    ));
}

#[test]
fn malformed_ciphertext_is_rejected() {
    let fx = Fixture::new();
    let location = fx.out_dir().join("evil.txt");
    fs::write(&location, "2790,__import__('os').system('true'),2790").unwrap();
    let store = MemoryRecordStore::with_records(vec![record("evil.txt", &location)]);
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    match workflow.decrypt_file("evil.txt") {
        Err(VaultError::MalformedCiphertext { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected malformed ciphertext, got {other:?}"),
    }
}

#[test]
fn missing_ciphertext_file_is_io_error() {
    let fx = Fixture::new();
    let location = fx.out_dir().join("gone.txt");
    let store = MemoryRecordStore::with_records(vec![record("gone.txt", &location)]);
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    assert!(matches!(workflow.decrypt_file("gone.txt"), Err(VaultError::Io { .. })));
}

#[test]
fn empty_file_round_trips_to_empty_text() {
    let fx = Fixture::new();
    let source = fx.source("empty.txt", "");
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let report = workflow.encrypt_file(&source).unwrap();
    assert_eq!(fs::read_to_string(report.destination).unwrap(), "");
    assert_eq!(workflow.decrypt_file("empty.txt").unwrap(), "");
}

// ── Menu ─────────────────────────────────────────────────────────

#[test]
fn menu_store_then_read() {
    let fx = Fixture::new();
    let source = fx.source("menu.txt", "A");
    let store = MemoryRecordStore::new();
    let workflow = FileCryptoWorkflow::new(&fx.config, &store);

    let script = format!("1\n{}\n2\nmenu.txt\nq\n", source.display());
    let mut output = Vec::new();
    rsa_vault::ui::run_menu(&workflow, Cursor::new(script), &mut output).unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(out.contains("Stored menu.txt"));
    assert!(out.contains("Decrypted: "));
    assert!(out.contains("Goodbye"));
    assert_eq!(store.count_by_name("menu.txt").unwrap(), 1);
}
