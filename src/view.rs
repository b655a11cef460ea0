//! Immediate-mode rendering of the search page.
//!
//! Widgets read from an immutable [`SearchState`] and report what the user did
//! as [`Msg`]s; the caller feeds those to the runtime after the frame.

use egui::{Align, CornerRadius, Layout, RichText, ScrollArea, Sense, Ui};

use crate::models::{SortField, StoryRecord};
use crate::state::{Msg, SearchState};
use crate::theme::{toggle_icon, AppTheme};

/// Draws the whole page and returns the messages raised this frame.
///
/// `filter_input` is the raw text of the filter box; the state only keeps its
/// lowercased form.
pub fn render(ui: &mut Ui, state: &SearchState, theme: &AppTheme, filter_input: &mut String) -> Vec<Msg> {
    let mut msgs = Vec::new();

    render_header(ui, state, theme, filter_input, &mut msgs);
    ui.add_space(8.0);
    render_form(ui, state, theme, filter_input, &mut msgs);

    if let Some(error) = &state.fetch_error {
        ui.add_space(8.0);
        render_error_banner(ui, error, theme, &mut msgs);
    }

    ui.add_space(12.0);
    render_table(ui, state, theme, &mut msgs);

    msgs
}

fn render_header(
    ui: &mut Ui,
    state: &SearchState,
    theme: &AppTheme,
    filter_input: &mut String,
    msgs: &mut Vec<Msg>,
) {
    ui.horizontal(|ui| {
        let heading = ui
            .add(
                egui::Label::new(RichText::new("HN Search").color(theme.highlight).size(28.0).strong())
                    .sense(Sense::click()),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("Back to the latest stories");

        if heading.clicked() {
            filter_input.clear();
            msgs.push(Msg::Reset);
        }

        if state.loading {
            ui.add_space(8.0);
            ui.spinner();
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let icon = toggle_icon(state.light_on);
            let toggle = ui
                .add(
                    egui::Button::new(RichText::new(icon).color(theme.button_foreground).size(20.0))
                        .min_size(egui::vec2(32.0, 32.0))
                        .corner_radius(CornerRadius::same(16))
                        .fill(theme.button_background),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text(if state.light_on { "Lights off" } else { "Lights on" });

            if toggle.clicked() {
                msgs.push(Msg::ToggleTheme);
            }
        });
    });
}

fn render_form(
    ui: &mut Ui,
    state: &SearchState,
    theme: &AppTheme,
    filter_input: &mut String,
    msgs: &mut Vec<Msg>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Search:").color(theme.text));

        let mut term = state.search_term.clone();
        let search_box = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("rust")
                .desired_width(220.0),
        );
        if search_box.changed() {
            msgs.push(Msg::SearchTermChanged(term.clone()));
        }

        let entered = search_box.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let submit = ui.add_enabled(!term.is_empty(), egui::Button::new("Submit"));
        if (submit.clicked() || entered) && !term.is_empty() {
            msgs.push(Msg::SubmitSearch);
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Filter:").color(theme.text));

        let filter_box = ui.add(egui::TextEdit::singleline(filter_input).desired_width(180.0));
        if filter_box.changed() {
            msgs.push(Msg::FilterChanged(filter_input.clone()));
        }
    });
}

fn render_error_banner(ui: &mut Ui, error: &str, theme: &AppTheme, msgs: &mut Vec<Msg>) {
    egui::Frame::new()
        .fill(theme.error_background)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Could not load stories: {}", error)).color(theme.text),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        msgs.push(Msg::DismissError);
                    }
                });
            });
        });
}

fn render_table(ui: &mut Ui, state: &SearchState, theme: &AppTheme, msgs: &mut Vec<Msg>) {
    let rows = state.visible_stories();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("stories_table")
                .num_columns(5)
                .striped(true)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    sort_header(ui, SortField::Title, state.sort_field, theme, msgs);
                    ui.label(RichText::new("url").color(theme.table_text).strong());
                    sort_header(ui, SortField::Author, state.sort_field, theme, msgs);
                    sort_header(ui, SortField::Points, state.sort_field, theme, msgs);
                    sort_header(ui, SortField::CreatedAt, state.sort_field, theme, msgs);
                    ui.end_row();

                    for story in rows {
                        render_row(ui, story, theme, msgs);
                        ui.end_row();
                    }
                });
        });
}

fn sort_header(ui: &mut Ui, field: SortField, active: SortField, theme: &AppTheme, msgs: &mut Vec<Msg>) {
    let mut text = RichText::new(field.label()).color(theme.table_text).strong();
    if field == active {
        text = text.underline();
    }

    let header = ui
        .add(egui::Label::new(text).sense(Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if header.clicked() {
        msgs.push(Msg::SortBy(field));
    }
}

fn render_row(ui: &mut Ui, story: &StoryRecord, theme: &AppTheme, msgs: &mut Vec<Msg>) {
    ui.add(egui::Label::new(RichText::new(&story.title).color(theme.table_text)).wrap());

    ui.horizontal(|ui| {
        if link_label(ui, "link", theme).clicked() {
            msgs.push(Msg::OpenLink(story.link_url()));
        }
        ui.label(RichText::new("|").color(theme.table_text));
        if link_label(ui, "comments", theme).clicked() {
            msgs.push(Msg::OpenLink(story.discussion_url()));
        }
    });

    ui.label(RichText::new(&story.author).color(theme.table_text));
    ui.label(RichText::new(story.points.to_string()).color(theme.table_text));
    let date = ui.label(RichText::new(story.created_date()).color(theme.table_text));
    if let Some(created) = story.created_at_utc() {
        let local = created.with_timezone(&chrono::Local);
        date.on_hover_text(local.format("%Y-%m-%d %H:%M").to_string());
    }
}

fn link_label(ui: &mut Ui, text: &str, theme: &AppTheme) -> egui::Response {
    ui.add(egui::Label::new(RichText::new(text).color(theme.link_color)).sense(Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
