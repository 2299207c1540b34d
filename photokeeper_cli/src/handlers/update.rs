use std::path::Path;
use photokeeper::document::Image;
use photokeeper::library::Library;
use photokeeper::utils::path::display_name;
use crate::errors::CliError;
use crate::utils::find_entry;

/// 处理 'update' 命令：通过详情编辑器替换照片和/或名称
pub fn handle_update(
    library: &mut Library,
    name: &str,
    image_path: Option<&Path>,
    title: Option<String>,
) -> Result<(), CliError> {
    // 1. 先读取图片，避免打开文档后才失败
    let image = image_path.map(Image::open).transpose()?;

    // 2. 打开详情编辑器
    let entry = find_entry(library, name)?;
    let mut editor = library.select(&entry)?;
    if let Some(image) = image {
        editor.set_image(image);
    }
    if let Some(title) = title {
        editor.set_title(title);
    }

    // 3. 没有任何修改时直接取消
    if !editor.has_changes() {
        editor.cancel()?;
        println!("Nothing to update.");
        return Ok(());
    }

    // 4. 生成缩略图、保存并按需重命名
    let outcome = editor.done()?;
    let path = library.finish_detail(outcome)?;
    println!("Document '{}' updated.", display_name(&path));
    Ok(())
}
