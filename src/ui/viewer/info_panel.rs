// SPDX-License-Identifier: MPL-2.0
//! Publisher and contact panel, with the language and theme choices.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component::Message;
use iced::widget::{button, rule, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Publisher contact numbers.
pub const PHONE_NUMBERS: [&str; 2] = ["9425478846", "9770872087"];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let publisher = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("info-publisher")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("info-availability")).size(typography::BODY))
        .push(Text::new(i18n.tr("info-address")).size(typography::BODY));

    let phones = PHONE_NUMBERS
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &number| {
            column.push(phone_row(i18n, number))
        });

    let current_locale = i18n.current_locale().to_string();
    let languages = i18n.available_locales.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, locale| {
            let code = locale.to_string();
            let style = if code == current_locale {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            let label = i18n.tr(&format!("language-name-{code}"));
            row.push(
                button(Text::new(label))
                    .on_press(Message::SetLanguage(code))
                    .style(style),
            )
        },
    );

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            let style = if mode == ctx.theme_mode {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(i18n.tr(mode.label_key())))
                    .on_press(Message::SetTheme(mode))
                    .style(style),
            )
        });

    let close = button(Text::new(i18n.tr("close-button")))
        .on_press(Message::CloseOverlay)
        .style(styles::button::link);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(publisher)
            .push(phones)
            .push(rule::horizontal(1))
            .push(labeled(i18n.tr("info-language"), languages))
            .push(labeled(i18n.tr("info-theme"), themes))
            .push(close),
    )
    .width(Length::Fixed(sizing::PANEL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn phone_row<'a>(i18n: &'a I18n, number: &'static str) -> Element<'a, Message> {
    let call = tooltip(
        button(Text::new(number).size(typography::BODY))
            .on_press(Message::CallPhone(number))
            .style(styles::button::link),
        Text::new(i18n.tr("info-call-tooltip")).size(typography::CAPTION),
        tooltip::Position::Top,
    );

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("info-phone-label")).size(typography::BODY))
        .push(call)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("info-copy")).size(typography::CAPTION))
                .on_press(Message::CopyPhone(number))
                .style(styles::button::unselected),
        )
        .into()
}

fn labeled<'a>(label: String, content: Row<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_are_ten_digits() {
        for number in PHONE_NUMBERS {
            assert_eq!(number.len(), 10);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn every_locale_has_a_display_name() {
        let i18n = I18n::default();
        for locale in &i18n.available_locales {
            let key = format!("language-name-{locale}");
            assert_ne!(i18n.tr(&key), format!("MISSING: {key}"));
        }
    }

    #[test]
    fn info_panel_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
        });
    }
}
