//!
//! # CLI Integration Tests
//!
//! Drives the `photokeeper` REPL through stdin and checks what it prints and
//! what it leaves on disk.
//!
//
// // # CLI 集成测试
// //
// // 通过标准输入驱动 REPL，并检查输出与磁盘上的结果。
// //

mod common;

use crate::common::{TestContext, quoted};
use assert_cmd::Command;
use predicates::prelude::*;

/// Opening a missing root creates it, and new documents get unique names.
//
// // 打开不存在的根目录会创建它，新文档获得唯一名称。
#[test]
fn test_open_add_and_list() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    // 1. 连续新建两个无标题文档和一个带标题文档
    context
        .open_command()
        .write_stdin("add\nadd\nadd -t \"Trip\"\nls\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is now open with 0 document(s)"))
        .stdout(predicate::str::contains("Document 'Photo' created"))
        .stdout(predicate::str::contains("Document 'Photo 1' created"))
        .stdout(predicate::str::contains("Trip"));

    // 2. 检查磁盘上的文档包
    assert!(context.library_path.join("Photo.ptk").is_dir());
    assert!(context.library_path.join("Photo 1. ptk").is_dir());
    assert!(context.library_path.join("Trip.ptk").join("photo.data").is_file());
    assert!(context.library_path.join("Trip.ptk").join("photo.metadata").is_file());

    // 3. 重新打开时会扫描到已有文档
    context
        .open_command()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is now open with 3 document(s)"));
    Ok(())
}

/// Adding a photo stores a thumbnail at the default height.
//
// // 添加照片时按默认高度生成缩略图。
#[test]
fn test_add_with_image_and_show() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    let image = context.create_image("beach.png", 512, 256)?;

    let input = format!(
        "add -i {} -t Beach\nshow Beach\nexit\n",
        quoted(&image)
    );
    context
        .open_command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:      Beach"))
        .stdout(predicate::str::contains("Thumbnail: 256x128"));
    Ok(())
}

/// Rows can only be deleted in editing mode, and the bundle stays on disk.
//
// // 只能在编辑模式下删除行，文档包仍保留在磁盘上。
#[test]
fn test_delete_requires_editing_mode() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_command()
        .write_stdin("add -t Keep\nrm Keep\nedit\nrm Keep\nls\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("editing mode"))
        .stdout(predicate::str::contains("[Done]"))
        .stdout(predicate::str::contains("'Keep' removed from the list."))
        .stdout(predicate::str::contains("(empty)"));

    assert!(context.library_path.join("Keep.ptk").is_dir());
    Ok(())
}

/// Renaming moves the bundle and a taken name gets a numbered suffix.
//
// // 重命名会移动文档包，已被占用的名称会加上编号。
#[test]
fn test_rename_and_update_title() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    let image = context.create_image("sky.png", 40, 20)?;

    let input = format!(
        "add -t Taken\nadd -t Draft\nrename Draft Taken\nupdate Taken -i {} -t Final\nexit\n",
        quoted(&image)
    );
    context
        .open_command()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document is now 'Taken 1'."))
        .stdout(predicate::str::contains("Document 'Final' updated."));

    assert!(!context.library_path.join("Draft.ptk").exists());
    assert!(context.library_path.join("Taken 1. ptk").is_dir());
    assert!(context.library_path.join("Final.ptk").is_dir());
    assert!(!context.library_path.join("Taken.ptk").exists());
    Ok(())
}

/// Title and note are written together and shown in the details.
//
// // 标题和备注一起写入，并在详情中显示。
#[test]
fn test_note_sets_title_and_note() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_command()
        .write_stdin("add -t Memo\nnote Memo -t \"Summer\" -n \"By the lake\"\nshow Memo\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:     Summer"))
        .stdout(predicate::str::contains("Note:      By the lake"));
    Ok(())
}

/// The configuration file controls the thumbnail height.
//
// // 配置文件控制缩略图高度。
#[test]
fn test_config_file_sets_thumbnail_height() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    let image = context.create_image("small.png", 64, 32)?;
    let config = context.write_config(r#"{ "thumbnailHeight": 16 }"#)?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_photokeeper"));
    cmd.arg("open")
        .arg(&context.library_path)
        .arg("--config")
        .arg(&config);

    let input = format!("add -i {} -t Small\nshow Small\nexit\n", quoted(&image));
    cmd.write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Thumbnail: 32x16"));
    Ok(())
}

/// Unknown names are reported without ending the session.
//
// // 未知名称会报错，但会话继续。
#[test]
fn test_unknown_entry_keeps_session_alive() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_command()
        .write_stdin("show Nowhere\nadd -t After\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("Document 'After' created"));
    assert!(context.path().join("library").join("After.ptk").is_dir());
    Ok(())
}

/// Without a root or a config file, the library lives in `PhotoKeeper/` under the
/// working directory and unrelated folders there are not scanned.
//
// // 未指定根目录时，文档库位于工作目录下的 `PhotoKeeper/`，其他目录不会被扫描。
#[test]
fn test_default_root_is_dedicated_directory() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    std::fs::create_dir(context.path().join("unrelated"))?;
    std::fs::write(context.path().join("unrelated").join("big.bin"), b"data")?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_photokeeper"));
    cmd.current_dir(context.path()).arg("open");
    cmd.write_stdin("add\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is now open with 0 document(s)"))
        .stderr(predicate::str::contains("could not be loaded").not());

    assert!(context.path().join("PhotoKeeper").join("Photo.ptk").is_dir());
    Ok(())
}

/// A failed `open` exits with a non-zero status.
//
// // 打开失败时以非零状态退出。
#[test]
fn test_open_failure_sets_exit_status() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_photokeeper"));
    cmd.arg("open")
        .arg(&context.library_path)
        .arg("--config")
        .arg(context.path().join("missing.json"));
    cmd.write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
    Ok(())
}

/// Adding after a delete picks a fresh name because the old bundle is still on disk.
//
// // 删除后再次添加会选择新名称，因为旧文档包仍在磁盘上。
#[test]
fn test_add_after_delete_gets_fresh_name() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_command()
        .write_stdin("add\nedit\nrm Photo\nadd\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document 'Photo 1' created"))
        .stderr(predicate::str::contains("Error").not());

    assert!(context.library_path.join("Photo.ptk").is_dir());
    assert!(context.library_path.join("Photo 1. ptk").is_dir());
    Ok(())
}
