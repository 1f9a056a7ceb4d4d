use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const PHONE_DIGITS: usize = 10;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten digits once every non-digit character is stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn has_max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Number,
    Date,
    Select,
    TextArea,
    Checkbox,
}

/// One input/select/textarea of a form, with its rules and the inline
/// message left by the last validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub error: Option<String>,
}

impl Field {
    pub fn new(name: &str, kind: FieldKind, value: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: value.to_string(),
            required: false,
            min_length: None,
            max_length: None,
            error: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
}

/// First failing rule, in order: required, email, phone, min length,
/// max length. Optional empty fields pass.
pub fn validate_field(field: &Field) -> Option<String> {
    let value = field.value.as_str();

    if field.required && !is_present(Some(value)) {
        return Some("Este campo es obligatorio".to_string());
    }
    if value.is_empty() {
        return None;
    }
    if field.kind == FieldKind::Email && !is_valid_email(value) {
        return Some("Ingresa un correo válido".to_string());
    }
    if field.kind == FieldKind::Tel && !is_valid_phone(value) {
        return Some(format!("Ingresa un teléfono válido de {PHONE_DIGITS} dígitos"));
    }
    if let Some(min) = field.min_length.filter(|m| *m > 0) {
        if !has_min_length(value, min) {
            return Some(format!("Mínimo {min} caracteres"));
        }
    }
    if let Some(max) = field.max_length.filter(|m| *m > 0) {
        if !has_max_length(value, max) {
            return Some(format!("Máximo {max} caracteres"));
        }
    }
    None
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Sets a field's value. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.name == name) {
            f.value = value.to_string();
        }
    }

    /// Annotates a field with a message from a cross-field rule.
    pub fn set_error(&mut self, name: &str, message: &str) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.name == name) {
            f.error = Some(message.to_string());
        }
    }

    /// Checks every field, annotating failures and clearing stale messages.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            field.error = validate_field(field);
            ok &= field.error.is_none();
        }
        ok
    }

    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.error.as_deref().map(|e| (f.name.as_str(), e)))
            .collect()
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ventas@agencia.com.mx"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_examples() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("(55) 1234 5678"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+52 55 1234 5678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn required_trims() {
        assert!(!is_present(None));
        assert!(!is_present(Some("   ")));
        assert!(is_present(Some(" x ")));
    }

    #[test]
    fn rules_short_circuit_in_order() {
        let f = Field::new("email", FieldKind::Email, "").required();
        assert_eq!(validate_field(&f).as_deref(), Some("Este campo es obligatorio"));

        let f = Field::new("email", FieldKind::Email, "x").required().min_length(5);
        assert_eq!(
            validate_field(&f).as_deref(),
            Some("Ingresa un correo válido")
        );

        let f = Field::new("pw", FieldKind::Password, "abc").min_length(6);
        assert_eq!(validate_field(&f).as_deref(), Some("Mínimo 6 caracteres"));

        let f = Field::new("msg", FieldKind::TextArea, "abcdef").max_length(3);
        assert_eq!(validate_field(&f).as_deref(), Some("Máximo 3 caracteres"));
    }

    #[test]
    fn optional_empty_fields_pass() {
        let f = Field::new("phone", FieldKind::Tel, "");
        assert_eq!(validate_field(&f), None);
    }

    #[test]
    fn form_annotates_and_clears() {
        let mut form = Form::new(vec![
            Field::new("name", FieldKind::Text, "").required(),
            Field::new("email", FieldKind::Email, "ana@correo.mx").required(),
            Field::new("phone", FieldKind::Tel, "123").required(),
        ]);

        assert!(!form.validate());
        let failing: Vec<&str> = form.errors().into_iter().map(|(n, _)| n).collect();
        assert_eq!(failing, ["name", "phone"]);

        form.fields[0].value = "Ana".into();
        form.fields[2].value = "55 1234 5678".into();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }
}
