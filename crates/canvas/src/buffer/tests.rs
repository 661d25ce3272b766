use doodle_primitives::{Position, Rgba, Size};

use super::PixelBuffer;
use crate::error::CanvasError;

const RED: Rgba = Rgba::rgb(255, 0, 0);

#[test]
fn new_buffer_is_transparent() {
	let buf = PixelBuffer::new(Size::new(3, 2));
	assert_eq!(buf.pixels().len(), 6);
	assert_eq!(buf.count(Rgba::TRANSPARENT), 6);
}

#[test]
fn checked_access_rejects_outside_positions() {
	let mut buf = PixelBuffer::filled(Size::new(2, 2), Rgba::WHITE);
	assert_eq!(buf.pixel(Position::new(1, 1)), Some(Rgba::WHITE));
	assert_eq!(buf.pixel(Position::new(2, 0)), None);
	assert_eq!(buf.pixel(Position::new(0, 2)), None);
	assert!(buf.pixel_mut(Position::new(5, 5)).is_none());
}

#[test]
fn index_mut_writes_single_pixel() {
	let mut buf = PixelBuffer::filled(Size::new(3, 3), Rgba::WHITE);
	buf[Position::new(2, 1)] = RED;
	assert_eq!(buf[Position::new(2, 1)], RED);
	assert_eq!(buf.count(RED), 1);
	assert_eq!(buf.pixels()[5], RED);
}

#[test]
#[should_panic(expected = "outside the 2x2 buffer")]
fn index_panics_outside_raster() {
	let buf = PixelBuffer::new(Size::new(2, 2));
	let _ = buf[Position::new(2, 0)];
}

#[test]
fn check_reports_position_and_size() {
	let buf = PixelBuffer::new(Size::new(4, 3));
	assert_eq!(buf.check(Position::new(3, 2)), Ok(()));
	assert_eq!(
		buf.check(Position::new(4, 0)),
		Err(CanvasError::OutOfRange {
			position: Position::new(4, 0),
			size: Size::new(4, 3),
		})
	);
}

#[test]
fn rgba_bytes_follow_channel_order() {
	let mut buf = PixelBuffer::new(Size::new(2, 1));
	buf[Position::new(1, 0)] = Rgba::new(1, 2, 3, 4);
	assert_eq!(buf.to_rgba_bytes(), vec![0, 0, 0, 0, 1, 2, 3, 4]);

	let back = PixelBuffer::from_rgba_bytes(buf.size(), &buf.to_rgba_bytes()).unwrap();
	assert_eq!(back, buf);
}

#[test]
fn from_rgba_bytes_rejects_wrong_length() {
	let err = PixelBuffer::from_rgba_bytes(Size::new(2, 2), &[0; 15]).unwrap_err();
	assert_eq!(
		err,
		CanvasError::BufferSize {
			expected: Some(16),
			actual: 15
		}
	);
	assert_eq!(err.to_string(), "expected 16 bytes of RGBA data, got 15");
}

#[test]
fn fill_all_overwrites_everything() {
	let mut buf = PixelBuffer::new(Size::new(5, 4));
	buf[Position::new(1, 1)] = RED;
	buf.fill_all(Rgba::WHITE);
	assert_eq!(buf.count(Rgba::WHITE), 20);
}

#[test]
fn debug_prints_small_buffers_cell_by_cell() {
	let buf = PixelBuffer::filled(Size::new(2, 1), RED);
	let text = format!("{buf:?}");
	assert!(text.starts_with("PixelBuffer 2x1 ["));
	assert!(text.contains("#FF0000FF #FF0000FF"));

	let large = PixelBuffer::new(Size::new(100, 100));
	assert!(format!("{large:?}").contains(".."));
}

#[test]
fn from_rgba_bytes_rejects_overflowing_size() {
	let size = Size::new(u32::MAX, u32::MAX);
	let err = PixelBuffer::from_rgba_bytes(size, &[0; 16]).unwrap_err();
	assert_eq!(err, CanvasError::BufferSize { expected: None, actual: 16 });
	assert_eq!(err.to_string(), "expected more than usize::MAX bytes of RGBA data, got 16");
}
