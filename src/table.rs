use std::path::{Path, PathBuf};

use iced::widget::image;

use crate::catalog::{self, AssetRecord};
use crate::thumbnail;

/// Table columns in display order. `Approved` is part of the header set but
/// has no backing data and is never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Image,
    CreatedBy,
    Created,
    ModifiedBy,
    Modified,
    Approved,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Image,
        Column::CreatedBy,
        Column::Created,
        Column::ModifiedBy,
        Column::Modified,
        Column::Approved,
    ];

    /// Columns that appear on screen, left to right.
    pub fn displayed() -> impl Iterator<Item = Column> {
        Column::ALL.into_iter().filter(|c| c.is_displayed())
    }

    pub fn is_displayed(self) -> bool {
        self != Column::Approved
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Asset Name",
            Column::Image => "Image",
            Column::CreatedBy => "Created By",
            Column::Created => "Date Created",
            Column::ModifiedBy => "Modified By",
            Column::Modified => "Date Modified",
            Column::Approved => "Approved",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loaded(image::Handle),
    /// Left blank; `path` is where the image was expected.
    Missing { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Row {
    pub record: AssetRecord,
    pub thumbnail: Thumbnail,
    pub visible: bool,
}

impl Row {
    /// Text shown in `column`, or None for cells without text.
    pub fn cell_text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Name => Some(&self.record.asset_name),
            Column::CreatedBy => Some(&self.record.created_by),
            Column::Created => Some(&self.record.created),
            Column::ModifiedBy => Some(&self.record.last_edit),
            Column::Modified => Some(&self.record.modified),
            Column::Image | Column::Approved => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build one row per record, in order. Thumbnails that fail to load are
    /// logged and left blank.
    pub fn populate(records: Vec<AssetRecord>, asset_dir: &Path, thumb_size: u32) -> Self {
        let rows = records
            .into_iter()
            .map(|record| {
                let path = catalog::thumbnail_path(asset_dir, &record.guid);
                let thumbnail = match thumbnail::load_thumbnail(&path, thumb_size) {
                    Ok((rgba, width, height)) => {
                        Thumbnail::Loaded(image::Handle::from_rgba(width, height, rgba))
                    }
                    Err(e) => {
                        log::warn!("Failed to load image: {e}");
                        Thumbnail::Missing { path }
                    }
                };
                Row {
                    record,
                    thumbnail,
                    visible: true,
                }
            })
            .collect();
        Table { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.visible).count()
    }
}
