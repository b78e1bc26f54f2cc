use dioxus::prelude::*;
use store::FileAttachment;

/// Read the first file picked in a file input into memory.
pub async fn read_picked_file(evt: FormEvent) -> Option<FileAttachment> {
    let file = evt.files().into_iter().next()?;
    let name = file.name();
    match file.read_bytes().await {
        Ok(bytes) => {
            Some(FileAttachment::new(name, bytes.to_vec()).with_content_type(file.content_type()))
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {:?}", name, e);
            None
        }
    }
}
