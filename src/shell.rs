//! Command line as handed over by the UEFI shell.

use uefi::prelude::*;
use uefi::proto::loaded_image::LoadedImage;

use crate::argv::copy_load_options;

/// Copy the image's load options into `dst` and return the byte length
/// firmware reported for them.
///
/// The reported length is passed on unchanged as the tokenizer's bound hint;
/// only what fits in `dst` is copied. An image without options yields 0.
pub fn load_options(image: Handle, system_table: &SystemTable<Boot>, dst: &mut [u16]) -> uefi::Result<usize> {
    let loaded = system_table.boot_services().open_protocol_exclusive::<LoadedImage>(image)?;
    let options = loaded.load_options_as_bytes().unwrap_or(&[]);
    let copied = copy_load_options(dst, options);
    if copied < options.len() {
        log::debug!("load options clipped: {} of {} bytes", copied, options.len());
    }
    Ok(options.len())
}
