use std::fs;

use launchboard_engine::{ensure_output_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_previous_render() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("results.html", "<p>No results found.</p>").unwrap();
    assert_eq!(first.file_name().unwrap(), "results.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "<p>No results found.</p>");

    let second = writer.write("results.html", "<table></table>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "<table></table>");

    // Only the target remains; no stray temp files.
    let entries = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[cfg(unix)]
#[test]
fn concurrent_reader_always_sees_a_complete_page() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let pages = ["<p>No results found.</p>", "<table><tr><td>SES-9</td></tr></table>"];
    let target = writer.write("results.html", pages[0]).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let reader = {
        let done = done.clone();
        let target = target.clone();
        thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                let page = fs::read_to_string(&target).expect("target present");
                assert!(pages.contains(&page.as_str()), "torn read: {page:?}");
            }
        })
    };

    for i in 0..300 {
        writer.write("results.html", pages[i % 2]).unwrap();
    }
    done.store(true, Ordering::Relaxed);

    reader.join().unwrap();
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("results.html", "data");
    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert!(!file_path.with_file_name("results.html").exists());
}

#[test]
fn for_path_splits_directory_and_name() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("launches.html");

    let (writer, filename) = AtomicFileWriter::for_path(&target).unwrap();
    assert_eq!(filename, "launches.html");
    let written = writer.write(&filename, "ok").unwrap();
    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(target).unwrap(), "ok");
}

#[test]
fn for_path_without_file_name_is_rejected() {
    let err = AtomicFileWriter::for_path(std::path::Path::new("/")).err().unwrap();
    assert!(matches!(err, PersistError::NoFileName(_)));
}
