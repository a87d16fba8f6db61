
use builder::{ArchiveBuilder, TestEntry};
use zipnames::{ExtensionMatch, NameLength, ReaderConfig, ZipReader};

fn bind(builder: &ArchiveBuilder) -> (tempfile::TempDir, ZipReader) {
    bind_with(builder, ReaderConfig::default())
}

fn bind_with(builder: &ArchiveBuilder, config: ReaderConfig) -> (tempfile::TempDir, ZipReader) {
    let dir = tempfile::tempdir().unwrap();
    let path = builder.write_to(dir.path(), "archive.zip");
    let mut reader = ZipReader::with_config(config);
    reader.set_input(&path).unwrap();
    (dir, reader)
}

#[test]
fn lists_entries_in_central_directory_order() {
    let archive = ArchiveBuilder::new()
        .file("a.txt", b"hello")
        .file("dir/b.bin", [0u8, 1, 2, 3]);
    let (_dir, reader) = bind(&archive);

    assert_eq!(reader.get_entries().unwrap(), vec!["a.txt", "dir/b.bin"]);
}

#[test]
fn empty_archive_has_no_entries() {
    let (_dir, reader) = bind(&ArchiveBuilder::new());
    assert!(reader.get_entries().unwrap().is_empty());
}

#[test]
fn repeated_enumeration_is_identical() {
    let archive = ArchiveBuilder::new()
        .file("one", "1")
        .file("two/", "")
        .file("two/three", "3");
    let (_dir, reader) = bind(&archive);

    let first = reader.get_entries().unwrap();
    let second = reader.get_entries().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["one", "two/", "two/three"]);
}

#[test]
fn duplicate_names_are_preserved() {
    let archive = ArchiveBuilder::new()
        .file("same.txt", "a")
        .file("same.txt", "b");
    let (_dir, reader) = bind(&archive);

    assert_eq!(reader.get_entries().unwrap(), vec!["same.txt", "same.txt"]);
}

#[test]
fn rebinding_replaces_the_archive() {
    let dir = tempfile::tempdir().unwrap();
    let first = ArchiveBuilder::new()
        .file("first.txt", "")
        .write_to(dir.path(), "first.zip");
    let second = ArchiveBuilder::new()
        .file("second.txt", "")
        .write_to(dir.path(), "second.zip");

    let mut reader = ZipReader::new();
    reader.set_input(&first).unwrap();
    assert_eq!(reader.get_entries().unwrap(), vec!["first.txt"]);

    reader.set_input(&second).unwrap();
    assert_eq!(reader.input(), Some(second.as_path()));
    assert_eq!(reader.get_entries().unwrap(), vec!["second.txt"]);
}

#[test]
fn failed_rebind_keeps_the_previous_archive() {
    let (dir, mut reader) = bind(&ArchiveBuilder::new().file("kept.txt", ""));

    assert!(reader.set_input(dir.path().join("other.txt")).is_err());
    assert!(reader.set_input(dir.path().join("missing.zip")).is_err());
    assert_eq!(reader.get_entries().unwrap(), vec!["kept.txt"]);
}

#[test]
fn archive_comment_is_ignored() {
    let archive = ArchiveBuilder::new()
        .file("a.txt", "")
        .comment("This is a zipfile comment.");
    let (_dir, reader) = bind(&archive);

    assert_eq!(reader.get_entries().unwrap(), vec!["a.txt"]);
}

#[test]
fn signature_in_file_content_does_not_confuse_the_scan() {
    let mut content = b"leading bytes ".to_vec();
    content.extend_from_slice(b"PK\x05\x06");
    content.extend_from_slice(b"PK\x01\x02 trailing bytes");
    let archive = ArchiveBuilder::new()
        .file("tricky.bin", content)
        .file("plain.txt", "");
    let (_dir, reader) = bind(&archive);

    assert_eq!(reader.get_entries().unwrap(), vec!["tricky.bin", "plain.txt"]);
}

#[test]
fn declared_lengths_list_names_containing_the_eocdr_signature() {
    let archive = ArchiveBuilder::new()
        .file("odd-PK\x05\x06-name", "")
        .file("normal.txt", "");
    let config = ReaderConfig::default().with_name_length(NameLength::Declared);
    let (_dir, reader) = bind_with(&archive, config);

    assert_eq!(
        reader.get_entries().unwrap(),
        vec!["odd-PK\u{5}\u{6}-name", "normal.txt"]
    );
}

#[test]
fn declared_lengths_skip_extra_fields_and_comments() {
    let archive = ArchiveBuilder::new()
        .entry(TestEntry {
            name: b"with-extra.txt".to_vec(),
            // extended timestamp field
            extra: b"\x55\x54\x05\x00\x03\x4e\x5b\x6c\x65".to_vec(),
            comment: b"entry comment".to_vec(),
            ..Default::default()
        })
        .file("plain.txt", "");
    let config = ReaderConfig::default().with_name_length(NameLength::Declared);
    let (_dir, reader) = bind_with(&archive, config);

    assert_eq!(
        reader.get_entries().unwrap(),
        vec!["with-extra.txt", "plain.txt"]
    );
}

#[test]
fn extension_can_match_ignoring_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = ArchiveBuilder::new()
        .file("a.txt", "")
        .write_to(dir.path(), "ARCHIVE.ZIP");

    let mut strict = ZipReader::new();
    assert!(strict.set_input(&path).is_err());

    let config = ReaderConfig::default().with_extension_match(ExtensionMatch::IgnoreAsciiCase);
    let mut relaxed = ZipReader::with_config(config);
    relaxed.set_input(&path).unwrap();
    assert_eq!(relaxed.get_entries().unwrap(), vec!["a.txt"]);
}

#[test]
fn raw_entries_keep_undecodable_bytes() {
    let archive = ArchiveBuilder::new()
        .file(b"caf\xe9.txt", "")
        .file("ascii.txt", "");
    let (_dir, reader) = bind(&archive);

    assert_eq!(
        reader.get_raw_entries().unwrap(),
        vec![b"caf\xe9.txt".to_vec(), b"ascii.txt".to_vec()]
    );
    assert_eq!(
        reader.get_entries().unwrap(),
        vec!["caf\u{fffd}.txt", "ascii.txt"]
    );
}

#[test]
fn utf8_names_pass_through() {
    let archive = ArchiveBuilder::new()
        .file("café.txt", "")
        .file("テスト/ファイル.txt", "");
    let (_dir, reader) = bind(&archive);

    assert_eq!(
        reader.get_entries().unwrap(),
        vec!["café.txt", "テスト/ファイル.txt"]
    );
}
