//! Integration tests for document discovery on a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

use scriptlint_glob::{discover, staged_files, FileFilter, GlobError};

/// Write `files` (relative path, contents) under a fresh temp dir.
fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (path, contents) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(full, contents).expect("write");
    }
    dir
}

/// Paths relative to `root`, with `/` separators.
fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
    let root = root.canonicalize().expect("canonicalize root");
    files
        .iter()
        .map(|f| {
            let f = f.canonicalize().expect("canonicalize file");
            f.strip_prefix(&root)
                .expect("under root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

#[test]
fn walk_keeps_markup_and_honors_gitignore() {
    let dir = tree(&[
        ("index.html", "<script>let a;</script>"),
        ("app.js", "let a;"),
        ("pages/about.htm", ""),
        ("build/out.html", ""),
        (".hidden/secret.html", ""),
        (".gitignore", "build/\n"),
    ]);

    let found = discover(&[dir.path().to_path_buf()], &FileFilter::default()).expect("discover");
    assert_eq!(relative(dir.path(), &found), vec!["index.html", "pages/about.htm"]);
}

#[test]
fn excludes_apply_during_walk() {
    let dir = tree(&[("a.html", ""), ("vendor/b.html", ""), ("c.html", "")]);
    let filter = FileFilter::new(vec!["*.html".into()], vec!["vendor/**".into()]).expect("filter");

    let found = discover(&[dir.path().to_path_buf()], &filter).expect("discover");
    assert_eq!(relative(dir.path(), &found), vec!["a.html", "c.html"]);
}

#[test]
fn explicit_files_bypass_filter_and_dedupe() {
    let dir = tree(&[("notes.txt", ""), ("x.html", "")]);
    let notes = dir.path().join("notes.txt");
    let roots = vec![notes.clone(), dir.path().to_path_buf(), dir.path().join("x.html")];

    let found = discover(&roots, &FileFilter::default()).expect("discover");
    assert_eq!(relative(dir.path(), &found), vec!["notes.txt", "x.html"]);
}

#[test]
fn missing_root_is_an_error() {
    let dir = tree(&[]);
    let missing = dir.path().join("nope");
    let err = discover(&[missing.clone()], &FileFilter::default()).unwrap_err();
    assert!(matches!(err, GlobError::NotFound(p) if p == missing));
}

#[test]
fn staged_files_on_unborn_branch() {
    let dir = tree(&[("a.html", ""), ("b.js", ""), ("c.html", "")]);
    let repo = Repository::init(dir.path()).expect("init");
    let mut index = repo.index().expect("index");
    index.add_path(Path::new("a.html")).expect("add a");
    index.add_path(Path::new("b.js")).expect("add b");
    index.write().expect("write index");

    let found = staged_files(dir.path(), &FileFilter::default()).expect("staged");
    // c.html is untracked, b.js is filtered out.
    assert_eq!(relative(dir.path(), &found), vec!["a.html"]);
}

#[test]
fn staged_files_after_commit_only_lists_changes() {
    let dir = tree(&[("a.html", "one"), ("b.html", "one")]);
    let repo = Repository::init(dir.path()).expect("init");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new("a.html")).expect("add a");
    index.add_path(Path::new("b.html")).expect("add b");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("tree");
    let sig = Signature::now("test", "test@example.com").expect("signature");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("commit");

    fs::write(dir.path().join("b.html"), "two").expect("modify");
    let mut index = repo.index().expect("index");
    index.add_path(Path::new("b.html")).expect("stage b");
    index.write().expect("write index");

    let found = staged_files(dir.path(), &FileFilter::default()).expect("staged");
    assert_eq!(relative(dir.path(), &found), vec!["b.html"]);
}
