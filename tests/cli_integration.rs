use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn preamble(dir: &Path, root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("preamble").unwrap();
    cmd.current_dir(dir).arg("--root").arg(root);
    cmd
}

#[test]
fn scaffolds_a_blog_entry_and_refuses_collisions() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("content");

    preamble(temp.path(), &root)
        .args(["new", "blog"])
        .args(["--title", "学习笔记"])
        .args(["--summary", "一篇学习笔记"])
        .args(["--tags", "学习,笔记"])
        .args(["--weather", "晴"])
        .args(["--mood", "😊"])
        .args(["--rating", "4"])
        .args(["--filename", "study-notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("study-notes.md"));

    let text = fs::read_to_string(root.join("blog/study-notes.md")).unwrap();
    assert!(text.starts_with("---\ntitle: \"学习笔记\"\ndate: "));
    assert!(text.contains("summary: \"一篇学习笔记\"\n"));
    assert!(text.contains("tags: [\"学习\", \"笔记\"]\n"));
    assert!(text.contains("weather: \"晴\"\n"));
    assert!(text.contains("mood: \"😊\"\n"));
    assert!(text.contains("rating: 4\n"));
    assert!(text.contains("draft: false\n"));
    assert!(text.ends_with("---\n\n在这里写正文…\n"));

    // Same target again: fatal, nothing overwritten.
    preamble(temp.path(), &root)
        .args(["new", "blog"])
        .args(["--title", "另一篇"])
        .args(["--summary", "x"])
        .args(["--tags", "x"])
        .args(["--weather", "晴"])
        .args(["--mood", "😊"])
        .args(["--rating", "3"])
        .args(["--filename", "study-notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let unchanged = fs::read_to_string(root.join("blog/study-notes.md")).unwrap();
    assert_eq!(unchanged, text);
}

#[test]
fn scaffolds_a_diary_entry_with_block_tags() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("content");

    preamble(temp.path(), &root)
        .args(["new", "diary"])
        .args(["--title", "今日小记"])
        .args(["--weather", "🌧️"])
        .args(["--mood", "😌"])
        .args(["--rating", "5"])
        .args(["--tags", "散步,随想"])
        .assert()
        .success()
        .stdout(predicate::str::contains("今日小记.md"));

    let text = fs::read_to_string(root.join("diary/今日小记.md")).unwrap();
    assert!(text.starts_with("---\ndate: \"2"));
    assert!(text.contains("title: \"今日小记\"\n"));
    assert!(text.contains("mood: \"😌\"\n"));
    assert!(text.contains("rating: 5\n"));
    assert!(text.contains("tags:\n  - 散步\n  - 随想\n"));
    assert!(text.ends_with("---\n\n随手记一记…\n"));
}

#[test]
fn stamping_diary_dates_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("content");
    let diary = root.join("diary");
    fs::create_dir_all(&diary).unwrap();
    fs::write(diary.join("walk.md"), "出门走了走\n").unwrap();
    fs::write(
        diary.join("dated.md"),
        "---\ndate: \"2023-12-31 09:00:00\"\n---\nhello",
    )
    .unwrap();

    preamble(temp.path(), &root)
        .arg("stamp")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamped 1 entries."));

    let stamped = fs::read_to_string(diary.join("walk.md")).unwrap();
    assert!(stamped.starts_with("---\ndate: \"2"));
    assert!(stamped.ends_with("---\n\n出门走了走\n"));
    // The already-dated entry keeps its original stamp.
    assert_eq!(
        fs::read_to_string(diary.join("dated.md")).unwrap(),
        "---\ndate: \"2023-12-31 09:00:00\"\n---\nhello"
    );

    // Second run: reported skips, no changes anywhere.
    preamble(temp.path(), &root)
        .arg("stamp")
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));
    assert_eq!(fs::read_to_string(diary.join("walk.md")).unwrap(), stamped);
}

#[test]
fn auto_processes_blog_entries_with_rule_fallbacks() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("content");
    let blog = root.join("blog");
    fs::create_dir_all(&blog).unwrap();
    fs::write(blog.join("第一篇.md"), "# 学习笔记\n\n正文内容").unwrap();
    fs::write(blog.join("done.md"), "---\ntitle: \"x\"\n---\nbody\n").unwrap();
    fs::write(blog.join("broken.md"), "---\nno closing delimiter here").unwrap();

    preamble(temp.path(), &root)
        .args(["process", "--kind", "blog", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("never closed"))
        .stdout(predicate::str::contains("learning-notes.md"));

    // Renamed to the keyword-table slug; old name gone.
    assert!(!blog.join("第一篇.md").exists());
    let text = fs::read_to_string(blog.join("learning-notes.md")).unwrap();
    assert!(text.starts_with("---\ntitle: \"学习笔记\"\ndate: 2"));
    assert!(text.contains("summary: \"学习笔记\"\n"));
    assert!(text.contains("tags: [\"笔记\", \"学习\"]\n"));
    assert!(text.contains("weather: \"晴\"\n"));
    assert!(text.contains("rating: 3\n"));
    assert!(text.contains("draft: false\n"));
    assert!(text.ends_with("---\n\n正文内容\n"));

    // Entries with existing or malformed blocks are untouched.
    assert_eq!(
        fs::read_to_string(blog.join("done.md")).unwrap(),
        "---\ntitle: \"x\"\n---\nbody\n"
    );
    assert_eq!(
        fs::read_to_string(blog.join("broken.md")).unwrap(),
        "---\nno closing delimiter here"
    );
}

#[test]
fn processing_an_empty_collection_reports_nothing_to_do() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("content");
    fs::create_dir_all(root.join("blog")).unwrap();

    preamble(temp.path(), &root)
        .args(["process", "--kind", "blog", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to process."));
}
