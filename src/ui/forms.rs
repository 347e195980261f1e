use anyhow::{anyhow, Result};
use ratatui::text::Line;

use crate::models::{ArtistDraft, Profession, VenueDraft, Zone};

use super::helpers::{cycle, field_line};

/// Message shown when a form is submitted without a name. The registry itself
/// skips such drafts silently.
pub(crate) const NAME_REQUIRED: &str = "El nombre es obligatorio.";

/// Fields of the artist registration form, in focus order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum ArtistField {
    #[default]
    Name,
    Profession,
    Style,
    Price,
    Zone,
    Contact,
    Social,
}

impl ArtistField {
    pub(crate) const ALL: [ArtistField; 7] = [
        ArtistField::Name,
        ArtistField::Profession,
        ArtistField::Style,
        ArtistField::Price,
        ArtistField::Zone,
        ArtistField::Contact,
        ArtistField::Social,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ArtistField::Name => "Nombre Artístico",
            ArtistField::Profession => "Profesión",
            ArtistField::Style => "Estilo de Show",
            ArtistField::Price => "Precio aproximado ($)",
            ArtistField::Zone => "Zona",
            ArtistField::Contact => "Email o Teléfono",
            ArtistField::Social => "Redes Sociales (@usuario)",
        }
    }

    pub(crate) fn is_selector(self) -> bool {
        matches!(self, ArtistField::Profession | ArtistField::Zone)
    }
}

/// Editable state of the artist registration form.
#[derive(Default, Clone, Debug)]
pub(crate) struct ArtistForm {
    pub(crate) name: String,
    pub(crate) profession: Profession,
    pub(crate) style: String,
    pub(crate) price: String,
    pub(crate) zone: Zone,
    pub(crate) contact: String,
    pub(crate) social: String,
    pub(crate) active: ArtistField,
    pub(crate) error: Option<String>,
}

impl ArtistForm {
    pub(crate) fn focus_next(&mut self, step: isize) {
        self.active = cycle(&ArtistField::ALL, self.active, step);
    }

    /// Change the active selector. Text fields ignore this.
    pub(crate) fn cycle_choice(&mut self, step: isize) {
        match self.active {
            ArtistField::Profession => {
                self.profession = cycle(&Profession::ALL, self.profession, step);
            }
            ArtistField::Zone => self.zone = cycle(&Zone::ALL, self.zone, step),
            _ => {}
        }
    }

    /// Append a character to the active text field. The price only accepts
    /// digits, which also keeps it non-negative.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            ArtistField::Name => self.name.push(ch),
            ArtistField::Style => self.style.push(ch),
            ArtistField::Price => {
                if !ch.is_ascii_digit() {
                    return false;
                }
                self.price.push(ch);
            }
            ArtistField::Contact => self.contact.push(ch),
            ArtistField::Social => self.social.push(ch),
            ArtistField::Profession | ArtistField::Zone => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(value) = self.text_mut(self.active) {
            value.pop();
        }
    }

    fn text_mut(&mut self, field: ArtistField) -> Option<&mut String> {
        match field {
            ArtistField::Name => Some(&mut self.name),
            ArtistField::Style => Some(&mut self.style),
            ArtistField::Price => Some(&mut self.price),
            ArtistField::Contact => Some(&mut self.contact),
            ArtistField::Social => Some(&mut self.social),
            ArtistField::Profession | ArtistField::Zone => None,
        }
    }

    fn display_value(&self, field: ArtistField) -> String {
        match field {
            ArtistField::Name => self.name.clone(),
            ArtistField::Profession => self.profession.to_string(),
            ArtistField::Style => self.style.clone(),
            ArtistField::Price => self.price.clone(),
            ArtistField::Zone => self.zone.to_string(),
            ArtistField::Contact => self.contact.clone(),
            ArtistField::Social => self.social.clone(),
        }
    }

    /// Convert the typed values into a draft. An empty price means zero.
    pub(crate) fn to_draft(&self) -> Result<ArtistDraft> {
        let price_raw = self.price.trim();
        let price = if price_raw.is_empty() {
            0
        } else {
            price_raw
                .parse::<u32>()
                .map_err(|_| anyhow!("El precio es demasiado alto."))?
        };
        Ok(ArtistDraft {
            name: self.name.clone(),
            profession: self.profession,
            style: self.style.clone(),
            price,
            zone: self.zone,
            contact: self.contact.clone(),
            social: self.social.clone(),
        })
    }

    pub(crate) fn build_line(&self, field: ArtistField) -> Line<'static> {
        let placeholder = match field {
            ArtistField::Name => "<requerido>",
            ArtistField::Price => "0",
            _ => "",
        };
        field_line(
            field.label(),
            &self.display_value(field),
            placeholder,
            self.active == field,
            field.is_selector(),
        )
    }

    /// Cursor column offset inside the active row, if it is a text field.
    pub(crate) fn cursor_offset(&self) -> Option<usize> {
        if self.active.is_selector() {
            return None;
        }
        let prefix = self.active.label().chars().count() + 2;
        Some(prefix + self.display_value(self.active).chars().count())
    }

    pub(crate) fn active_row(&self) -> usize {
        ArtistField::ALL
            .iter()
            .position(|field| *field == self.active)
            .unwrap_or_default()
    }
}

/// Fields of the venue registration form, in focus order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum VenueField {
    #[default]
    Name,
    Zone,
    Address,
    Contact,
    Social,
}

impl VenueField {
    pub(crate) const ALL: [VenueField; 5] = [
        VenueField::Name,
        VenueField::Zone,
        VenueField::Address,
        VenueField::Contact,
        VenueField::Social,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            VenueField::Name => "Nombre del Restaurante/Bar",
            VenueField::Zone => "Zona",
            VenueField::Address => "Dirección",
            VenueField::Contact => "Email o Teléfono",
            VenueField::Social => "Redes Sociales",
        }
    }
}

#[derive(Default, Clone, Debug)]
pub(crate) struct VenueForm {
    pub(crate) name: String,
    pub(crate) zone: Zone,
    pub(crate) address: String,
    pub(crate) contact: String,
    pub(crate) social: String,
    pub(crate) active: VenueField,
    pub(crate) error: Option<String>,
}

impl VenueForm {
    pub(crate) fn focus_next(&mut self, step: isize) {
        self.active = cycle(&VenueField::ALL, self.active, step);
    }

    pub(crate) fn cycle_choice(&mut self, step: isize) {
        if self.active == VenueField::Zone {
            self.zone = cycle(&Zone::ALL, self.zone, step);
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.text_mut(self.active) {
            Some(value) => {
                value.push(ch);
                true
            }
            None => false,
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(value) = self.text_mut(self.active) {
            value.pop();
        }
    }

    fn text_mut(&mut self, field: VenueField) -> Option<&mut String> {
        match field {
            VenueField::Name => Some(&mut self.name),
            VenueField::Zone => None,
            VenueField::Address => Some(&mut self.address),
            VenueField::Contact => Some(&mut self.contact),
            VenueField::Social => Some(&mut self.social),
        }
    }

    fn display_value(&self, field: VenueField) -> String {
        match field {
            VenueField::Name => self.name.clone(),
            VenueField::Zone => self.zone.to_string(),
            VenueField::Address => self.address.clone(),
            VenueField::Contact => self.contact.clone(),
            VenueField::Social => self.social.clone(),
        }
    }

    pub(crate) fn to_draft(&self) -> VenueDraft {
        VenueDraft {
            name: self.name.clone(),
            zone: self.zone,
            address: self.address.clone(),
            contact: self.contact.clone(),
            social: self.social.clone(),
        }
    }

    pub(crate) fn build_line(&self, field: VenueField) -> Line<'static> {
        let placeholder = if field == VenueField::Name {
            "<requerido>"
        } else {
            ""
        };
        field_line(
            field.label(),
            &self.display_value(field),
            placeholder,
            self.active == field,
            field == VenueField::Zone,
        )
    }

    pub(crate) fn cursor_offset(&self) -> Option<usize> {
        if self.active == VenueField::Zone {
            return None;
        }
        let prefix = self.active.label().chars().count() + 2;
        Some(prefix + self.display_value(self.active).chars().count())
    }

    pub(crate) fn active_row(&self) -> usize {
        VenueField::ALL
            .iter()
            .position(|field| *field == self.active)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut ArtistForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn price_accepts_digits_only() {
        let mut form = ArtistForm {
            active: ArtistField::Price,
            ..ArtistForm::default()
        };
        type_text(&mut form, "1-5a0");
        assert_eq!(form.price, "150");
        assert_eq!(form.to_draft().map(|draft| draft.price).ok(), Some(150));
    }

    #[test]
    fn empty_price_defaults_to_zero() {
        let form = ArtistForm::default();
        assert_eq!(form.to_draft().map(|draft| draft.price).ok(), Some(0));
    }

    #[test]
    fn oversized_price_is_rejected() {
        let form = ArtistForm {
            price: "99999999999".to_string(),
            ..ArtistForm::default()
        };
        assert!(form.to_draft().is_err());
    }

    #[test]
    fn selectors_cycle_through_every_choice() {
        let mut form = ArtistForm {
            active: ArtistField::Profession,
            ..ArtistForm::default()
        };
        assert!(!form.push_char('x'));
        form.cycle_choice(-1);
        assert_eq!(form.profession, Profession::Other);
        form.focus_next(3);
        assert_eq!(form.active, ArtistField::Zone);
        form.cycle_choice(3);
        assert_eq!(form.zone, Zone::SanTelmo);
        assert_eq!(form.cursor_offset(), None);
    }

    #[test]
    fn focus_wraps_around_fields() {
        let mut form = VenueForm::default();
        form.focus_next(-1);
        assert_eq!(form.active, VenueField::Social);
        form.focus_next(1);
        assert_eq!(form.active, VenueField::Name);
        for ch in "Bar Sur".chars() {
            form.push_char(ch);
        }
        form.backspace();
        assert_eq!(form.to_draft().name, "Bar Su");
        assert_eq!(form.active_row(), 0);
    }
}
