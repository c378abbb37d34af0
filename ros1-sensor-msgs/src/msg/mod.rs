mod compressed_image;

// Make these message types public
pub use compressed_image::CompressedImage;
