//! Contact section

use super::{parse_bool, ConfigSchema, FieldKind, FieldSpec};
use crate::config_editor::{ConfigDocument, ConfigEndpoints};
use crate::models::ContactInfo;

pub const CONFIG: ConfigEndpoints = ConfigEndpoints {
    path: "/contact",
    reset: "/contact/reset",
};

impl ConfigDocument for ContactInfo {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl ConfigSchema for ContactInfo {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Heading", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Text),
        FieldSpec::new("phone", "Phone", FieldKind::Text),
        FieldSpec::new("whatsapp", "WhatsApp", FieldKind::Text),
        FieldSpec::new("instagram", "Instagram", FieldKind::Text),
        FieldSpec::new("address", "Address", FieldKind::TextArea),
        FieldSpec::new("businessHours", "Business hours", FieldKind::TextArea),
        FieldSpec::new("isActive", "Show contact details", FieldKind::Toggle),
    ];

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "whatsapp" => self.whatsapp.clone(),
            "instagram" => self.instagram.clone(),
            "address" => self.address.clone(),
            "businessHours" => self.business_hours.clone(),
            "isActive" => self.is_active.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "whatsapp" => self.whatsapp = value,
            "instagram" => self.instagram = value,
            "address" => self.address = value,
            "businessHours" => self.business_hours = value,
            "isActive" => self.is_active = parse_bool(&value),
            _ => log::warn!("unknown contact field {}", key),
        }
    }
}

impl ContactInfo {
    pub fn mailto(&self) -> Option<String> {
        let email = self.email.trim();
        (!email.is_empty()).then(|| format!("mailto:{}", email))
    }

    /// wa.me link; WhatsApp wants digits only
    pub fn whatsapp_link(&self) -> Option<String> {
        let digits: String = self.whatsapp.chars().filter(|c| c.is_ascii_digit()).collect();
        (!digits.is_empty()).then(|| format!("https://wa.me/{}", digits))
    }

    pub fn instagram_link(&self) -> Option<String> {
        let handle = self.instagram.trim().trim_start_matches('@');
        (!handle.is_empty()).then(|| format!("https://instagram.com/{}", handle))
    }
}
