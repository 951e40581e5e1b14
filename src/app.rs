use std::path::Path;

use iced::widget::{Space, button, column, container, image, row, rule, scrollable, text, text_input};
use iced::{Alignment, Color, Element, Length, Size, Task, Theme};

use crate::catalog::AssetRecord;
use crate::filter;
use crate::table::{Column, Row, Table, Thumbnail};

const WINDOW_TITLE: &str = "Asset Manager";
const WINDOW_SIZE: Size = Size::new(607.0, 1024.0);
const THUMBNAIL_SIZE: u32 = 64;
const ROW_HEIGHT: f32 = 64.0;
const LABEL_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.55);

/// Build the table from `records` and run the window until it is closed.
pub fn run(records: Vec<AssetRecord>, asset_dir: &Path) -> iced::Result {
    let table = Table::populate(records, asset_dir, THUMBNAIL_SIZE);
    log::info!(
        "Populated {} rows ({} without thumbnail)",
        table.len(),
        table
            .rows()
            .iter()
            .filter(|r| matches!(r.thumbnail, Thumbnail::Missing { .. }))
            .count()
    );

    iced::application(
        move || (AssetManager::new(table.clone()), Task::none()),
        update,
        view,
    )
    .title(WINDOW_TITLE)
    .theme(theme)
    .window_size(WINDOW_SIZE)
    .resizable(false)
    .centered()
    .run()
}

struct AssetManager {
    table: Table,
    query: String,
}

impl AssetManager {
    fn new(table: Table) -> Self {
        Self {
            table,
            query: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Search,
    Clear,
}

fn update(state: &mut AssetManager, message: Message) -> Task<Message> {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
        }
        Message::Search => {
            filter::search(&mut state.table, &state.query);
        }
        Message::Clear => {
            state.query.clear();
            filter::clear(&mut state.table);
        }
    }
    Task::none()
}

fn view(state: &AssetManager) -> Element<'_, Message> {
    let toolbar = row![
        text_input("Search assets", &state.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::Search),
        button("Search").on_press(Message::Search),
        button("Clear Search").on_press(Message::Clear),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Alignment::Center);

    let count = text(format!(
        "{} of {} assets",
        state.table.visible_count(),
        state.table.len()
    ))
    .size(13)
    .color(LABEL_COLOR);

    let labels: Vec<Element<'_, Message>> = Column::displayed()
        .map(|col| {
            container(text(col.label()).size(12).color(LABEL_COLOR))
                .width(column_width(col))
                .into()
        })
        .collect();
    let header = row(labels).spacing(8).padding([4, 10]);

    let body: Element<'_, Message> = if state.table.is_empty() {
        container(text("The catalog is empty")).center(Length::Fill).into()
    } else {
        let rows = state
            .table
            .rows()
            .iter()
            .filter(|r| r.visible)
            .map(table_row);
        scrollable(column(rows).spacing(2).padding([0, 10]))
            .height(Length::Fill)
            .into()
    };

    container(column![
        toolbar,
        container(count).padding([0, 10]),
        header,
        rule::horizontal(1),
        body,
    ])
    .into()
}

fn table_row(r: &Row) -> Element<'_, Message> {
    let cells: Vec<Element<'_, Message>> = Column::displayed()
        .map(|col| {
            let content: Element<'_, Message> = match (col, &r.thumbnail) {
                (Column::Image, Thumbnail::Loaded(handle)) => image(handle.clone())
                    .width(ROW_HEIGHT)
                    .height(ROW_HEIGHT)
                    .into(),
                (Column::Image, Thumbnail::Missing { .. }) => Space::new()
                    .width(ROW_HEIGHT)
                    .height(ROW_HEIGHT)
                    .into(),
                _ => text(r.cell_text(col).unwrap_or_default()).size(12).into(),
            };
            container(content)
                .width(column_width(col))
                .center_y(ROW_HEIGHT)
                .into()
        })
        .collect();
    row(cells).spacing(8).into()
}

fn column_width(col: Column) -> Length {
    match col {
        Column::Image => Length::Fixed(ROW_HEIGHT),
        Column::Name => Length::FillPortion(3),
        _ => Length::FillPortion(2),
    }
}

fn theme(_state: &AssetManager) -> Theme {
    Theme::Dark
}
