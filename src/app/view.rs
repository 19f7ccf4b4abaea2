// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Everything here is a pure derivation of `App` state: the drop zone shows
//! either the empty-state prompt or the preview, the submit button's
//! enabled/label state follows the submission machine, and the result panel
//! mirrors the caption outcome.

use super::{CaptionOutcome, Message, Selected, Submission};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Option<&'a Selected>,
    pub outcome: &'a CaptionOutcome,
    pub submission: Submission,
    pub drop_hover: bool,
    pub notifications: &'a notifications::Manager,
}

/// Whether the submit trigger is enabled.
pub fn submit_enabled(submission: Submission, has_selection: bool) -> bool {
    submission.is_idle() && has_selection
}

/// Message key for the submit trigger's label.
pub fn submit_label_key(submission: Submission) -> &'static str {
    if submission.is_idle() {
        "submit-button"
    } else {
        "submit-button-busy"
    }
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(title)
        .push(view_drop_zone(&ctx))
        .push(view_submit_button(&ctx));

    if let Some(panel) = view_result_panel(&ctx) {
        content = content.push(panel);
    }

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let toast_overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::with_children(vec![page.into(), toast_overlay]).into()
}

/// The drop zone: preview when an image is selected, prompt otherwise.
fn view_drop_zone<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match ctx.selected {
        Some(selected) => {
            let preview = Image::new(selected.preview.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

            let file_name = Text::new(selected.image.file_name.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400);

            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(preview)
                .push(file_name)
                .into()
        }
        None => {
            let title = Text::new(ctx.i18n.tr("empty-state-title"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_400);

            let subtitle = Text::new(ctx.i18n.tr("empty-state-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400);

            let open_button = button(Text::new(ctx.i18n.tr("empty-state-button")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::primary_button)
                .on_press(Message::OpenFileDialog);

            let drop_hint = Text::new(ctx.i18n.tr("empty-state-drop-hint"))
                .size(typography::CAPTION)
                .color(Color {
                    a: 0.5,
                    ..palette::GRAY_400
                });

            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(title)
                .push(subtitle)
                .push(open_button)
                .push(drop_hint)
                .into()
        }
    };

    let height = if ctx.selected.is_some() {
        Length::Shrink
    } else {
        Length::Fixed(sizing::DROP_ZONE_HEIGHT)
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(height)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::drop_zone(ctx.drop_hover))
        .into()
}

fn view_submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(submit_label_key(ctx.submission)))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let enabled = submit_enabled(ctx.submission, ctx.selected.is_some());

    button(label)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::primary_button)
        .on_press_maybe(enabled.then_some(Message::Submit))
        .into()
}

/// The result panel; nothing is rendered while the outcome is empty.
fn view_result_panel<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let (accent, body) = match ctx.outcome {
        CaptionOutcome::Empty => return None,
        CaptionOutcome::Success(caption) => (palette::SUCCESS_500, caption.clone()),
        CaptionOutcome::Failure(key) => (palette::ERROR_500, ctx.i18n.tr(key)),
    };

    let title = Text::new(ctx.i18n.tr("caption-panel-title")).size(typography::TITLE_SM);
    let text = Text::new(body).size(typography::BODY);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(text),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::result_panel(accent));

    Some(panel.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_requires_selection_and_idle() {
        assert!(submit_enabled(Submission::Idle, true));
        assert!(!submit_enabled(Submission::Idle, false));
        assert!(!submit_enabled(Submission::InFlight { generation: 1 }, true));
        assert!(!submit_enabled(
            Submission::InFlight { generation: 1 },
            false
        ));
    }

    #[test]
    fn submit_label_switches_while_in_flight() {
        assert_eq!(submit_label_key(Submission::Idle), "submit-button");
        assert_eq!(
            submit_label_key(Submission::InFlight { generation: 1 }),
            "submit-button-busy"
        );
    }
}
