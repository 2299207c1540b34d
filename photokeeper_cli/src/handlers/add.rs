use std::path::Path;
use photokeeper::document::{Image, PhotoEntry};
use photokeeper::library::Library;
use photokeeper::utils::path::display_name;
use crate::errors::CliError;

/// 处理 'add' 命令：新建文档，可选地附带一张照片
pub fn handle_add(
    library: &mut Library,
    image_path: Option<&Path>,
    title: Option<&str>,
) -> Result<(), CliError> {
    // 1. 读取图片并生成缩略图
    let photo = match image_path {
        Some(path) => {
            let image = Image::open(path)?;
            Some(PhotoEntry::from_image(image, library.thumbnail_height())?)
        }
        None => None,
    };

    // 2. 写入文档包并加入列表
    let path = library.insert_new_document(photo, title)?;
    println!("Document '{}' created at {:?}.", display_name(&path), path);
    Ok(())
}
