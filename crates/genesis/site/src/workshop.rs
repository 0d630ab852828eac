//! Simulated bug/fix gallery of the development phase

use crate::error::SiteResult;
use serde::Serialize;

pub const WORKING_CODE: &str = r#"// ImageGallery.tsx
import React, { useState } from 'react';

const ImageGallery: React.FC = () => {
  const [images] = useState([
    { id: 1, src: '/mountain.jpg', alt: 'Mountain' },
    { id: 2, src: '/ocean.jpg', alt: 'Ocean' }
  ]);

  return (
    <div className="grid grid-cols-2 gap-4">
      {images.map(img => (
        <img
          key={img.id}
          src={img.src}
          alt={img.alt}
          className="rounded-lg hover:scale-105 transition-transform"
        />
      ))}
    </div>
  );
};"#;

pub const BUGGY_CODE: &str = r#"// ImageGallery.tsx - WITH BUG! 🐛
import React, { useState } from 'react';

const ImageGallery: React.FC = () => {
  const [images] = useState([
    { id: 1, src: '/mountain.jpg', alt: 'Mountain' },
    { id: 2, src: '/ocean.jpg', alt: 'Ocean' }
  ]);

  return (
    <div className="grid grid-cols-1 gap-4"> {/* BUG: Wrong grid-cols! */}
      {images.map(img => (
        <img
          key={img.id}
          src={img.src}
          alt={img.alt}
          className="rounded-lg w-12 h-12" {/* BUG: Wrong dimensions! */}
        />
      ))}
    </div>
  );
};"#;

/// Presentation of the demo gallery in its current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryLayout {
    pub grid_columns: u8,
    pub image_classes: Vec<&'static str>,
}

/// Toast raised by the workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub destructive: bool,
}

/// Destination of the "copy code" button
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> SiteResult<()>;
}

/// Bug/fix toggle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workshop {
    bug_active: bool,
}

impl Workshop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bug_active(&self) -> bool {
        self.bug_active
    }

    /// The bug button: injects the bug, or fixes it if already injected
    pub fn toggle(&mut self) -> bool {
        self.bug_active = !self.bug_active;
        tracing::debug!(bug_active = self.bug_active, "workshop gallery toggled");
        self.bug_active
    }

    pub fn current_code(&self) -> &'static str {
        if self.bug_active {
            BUGGY_CODE
        } else {
            WORKING_CODE
        }
    }

    pub fn gallery(&self) -> GalleryLayout {
        if self.bug_active {
            GalleryLayout {
                grid_columns: 1,
                image_classes: vec!["rounded-lg", "shadow-md", "w-12", "h-12", "object-none"],
            }
        } else {
            GalleryLayout {
                grid_columns: 2,
                image_classes: vec!["rounded-lg", "shadow-md", "hover:scale-105"],
            }
        }
    }

    /// Translation key of the bug button label
    pub fn button_label_key(&self) -> &'static str {
        if self.bug_active {
            "workshop.fixBug"
        } else {
            "workshop.simulateBug"
        }
    }

    /// Copy the displayed snippet; the toast reports the outcome
    pub fn copy_code(&self, clipboard: &mut dyn Clipboard) -> Toast {
        match clipboard.write_text(self.current_code()) {
            Ok(()) => Toast {
                title_key: "workshop.codeCopied",
                description_key: "workshop.codeDescription",
                destructive: false,
            },
            Err(err) => {
                tracing::warn!(error = %err, "copying workshop code failed");
                Toast {
                    title_key: "workshop.error",
                    description_key: "workshop.copyError",
                    destructive: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[derive(Default)]
    struct Buffer(Option<String>);

    impl Clipboard for Buffer {
        fn write_text(&mut self, text: &str) -> SiteResult<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl Clipboard for Denied {
        fn write_text(&mut self, _: &str) -> SiteResult<()> {
            Err(SiteError::Clipboard("permission denied".into()))
        }
    }

    #[test]
    fn toggling_swaps_code_layout_and_label() {
        let mut workshop = Workshop::new();
        assert_eq!(workshop.current_code(), WORKING_CODE);
        assert_eq!(workshop.gallery().grid_columns, 2);
        assert_eq!(workshop.button_label_key(), "workshop.simulateBug");

        assert!(workshop.toggle());
        assert!(workshop.current_code().contains("WITH BUG"));
        let gallery = workshop.gallery();
        assert_eq!(gallery.grid_columns, 1);
        assert!(gallery.image_classes.contains(&"w-12"));
        assert!(!gallery.image_classes.contains(&"hover:scale-105"));
        assert_eq!(workshop.button_label_key(), "workshop.fixBug");

        assert!(!workshop.toggle());
        assert_eq!(workshop.current_code(), WORKING_CODE);
    }

    #[test]
    fn copy_writes_the_displayed_snippet() {
        let mut workshop = Workshop::new();
        workshop.toggle();
        let mut buffer = Buffer::default();

        let toast = workshop.copy_code(&mut buffer);
        assert!(!toast.destructive);
        assert_eq!(buffer.0.as_deref(), Some(BUGGY_CODE));
    }

    #[test]
    fn copy_failure_raises_destructive_toast() {
        let toast = Workshop::new().copy_code(&mut Denied);
        assert!(toast.destructive);
        assert_eq!(toast.title_key, "workshop.error");
    }
}
