//! Lesson registration form and its submission state machine

use super::error::ValidationError;
use super::field::FormField;
use super::image::SelectedImage;
use super::preview::{PreviewHandle, PreviewRegistry};

pub const SUCCESS_MESSAGE: &str = "✅ Form submitted successfully! We'll contact you soon.";
pub const ERROR_MESSAGE: &str = "❌ Something went wrong. Please try again later.";

/// Index of the image path input in field navigation
pub const IMAGE_FIELD_INDEX: usize = 5;
/// Index of the buttons row in field navigation
pub const BUTTONS_ROW_INDEX: usize = 6;
const FIELD_COUNT: usize = 7;

/// Button order on the buttons row
pub const SUBMIT_BUTTON: usize = 0;
pub const BACK_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Lifecycle of a single submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// The five text inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Address,
    LicenseNumber,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Address,
        FieldId::LicenseNumber,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Validated snapshot handed to the submission client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub license_number: String,
    pub license_image: SelectedImage,
}

impl Registration {
    /// Text parts in multipart order, keyed by their wire names
    pub fn text_parts(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("licenseNumber", &self.license_number),
        ]
    }
}

/// In-memory registration data plus submission status
#[derive(Debug)]
pub struct RegistrationForm {
    pub name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub address: FormField,
    pub license_number: FormField,
    /// Path typed by the user; only becomes `license_image` once accepted
    pub image_path: FormField,
    license_image: Option<SelectedImage>,
    preview: Option<PreviewHandle>,
    previews: PreviewRegistry,
    status: SubmissionStatus,
    message: String,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Back)
    pub selected_button: usize,
}

impl RegistrationForm {
    pub fn new(previews: PreviewRegistry) -> Self {
        let mut image_path = FormField::required("licenseImage", "Driver's License Image", false);
        // Presence of the image is enforced separately at submit time
        image_path.required = false;

        Self {
            name: FormField::required("name", "Full Name", false),
            phone: FormField::required("phone", "Phone Number", false),
            email: FormField::required("email", "Email Address", false),
            address: FormField::required("address", "Address", true),
            license_number: FormField::required(
                "licenseNumber",
                "Driver's License Number",
                false,
            ),
            image_path,
            license_image: None,
            preview: None,
            previews,
            status: SubmissionStatus::Idle,
            message: String::new(),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn license_image(&self) -> Option<&SelectedImage> {
        self.license_image.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    /// Submit is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Address => &self.address,
            FieldId::LicenseNumber => &self.license_number,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::Address => &mut self.address,
            FieldId::LicenseNumber => &mut self.license_number,
        }
    }

    /// Replace one text field's value. Ignored while loading.
    pub fn edit_field(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        if self.status.is_loading() {
            return false;
        }
        self.field_mut(id).set_text(value);
        true
    }

    /// Validate and accept a license image.
    ///
    /// On success the previous preview handle is dropped and a new one
    /// acquired. On failure nothing changes.
    pub fn select_image(&mut self, raw_path: &str) -> Result<(), ValidationError> {
        if self.status.is_loading() {
            return Err(ValidationError::SubmissionInProgress);
        }
        let image = SelectedImage::select(raw_path)?;
        tracing::info!(
            file = %image.file_name,
            content_type = %image.content_type,
            size = image.size,
            "License image accepted"
        );

        // Release the superseded handle before acquiring the next one
        self.preview = None;
        self.preview = Some(self.previews.acquire(&image));
        self.license_image = Some(image);
        Ok(())
    }

    /// Select whatever path is currently typed into the image field
    pub fn select_typed_image(&mut self) -> Result<(), ValidationError> {
        let raw = self.image_path.as_text().to_string();
        self.select_image(&raw)
    }

    /// Check required inputs and move to `Loading`.
    ///
    /// Returns the snapshot to upload. An error leaves status and message
    /// untouched and moves focus to the offending input.
    pub fn begin_submit(&mut self) -> Result<Registration, ValidationError> {
        if self.status.is_loading() {
            return Err(ValidationError::SubmissionInProgress);
        }
        if let Some(index) = FieldId::ALL
            .iter()
            .position(|id| self.field(*id).is_missing())
        {
            let label = self.field(FieldId::ALL[index]).label.clone();
            self.set_active_field(index);
            return Err(ValidationError::MissingField { label });
        }
        let Some(image) = self.license_image.clone() else {
            self.set_active_field(IMAGE_FIELD_INDEX);
            return Err(ValidationError::MissingImage);
        };

        self.status = SubmissionStatus::Loading;
        self.message.clear();

        Ok(Registration {
            name: self.name.value.clone(),
            phone: self.phone.value.clone(),
            email: self.email.value.clone(),
            address: self.address.value.clone(),
            license_number: self.license_number.value.clone(),
            license_image: image,
        })
    }

    /// Record a completed request. Only meaningful while loading.
    pub fn complete_success(&mut self) -> bool {
        if !self.status.is_loading() {
            tracing::warn!(status = self.status.label(), "Ignoring success outside loading");
            return false;
        }
        self.reset();
        self.status = SubmissionStatus::Success;
        self.message = SUCCESS_MESSAGE.to_string();
        true
    }

    /// Record a failed request; entered values are kept
    pub fn complete_failure(&mut self) -> bool {
        if !self.status.is_loading() {
            tracing::warn!(status = self.status.label(), "Ignoring failure outside loading");
            return false;
        }
        self.status = SubmissionStatus::Error;
        self.message = ERROR_MESSAGE.to_string();
        true
    }

    /// Clear every input, the image and its preview
    fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.image_path.clear();
        self.license_image = None;
        self.preview = None;
        self.active_field_index = 0;
        self.selected_button = SUBMIT_BUTTON;
    }

    // Field navigation

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FIELD_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT - 1);
    }

    pub fn is_image_field_active(&self) -> bool {
        self.active_field_index == IMAGE_FIELD_INDEX
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// The text input under the cursor, if any. Locked while loading.
    pub fn active_input_mut(&mut self) -> Option<&mut FormField> {
        if self.status.is_loading() {
            return None;
        }
        match self.active_field_index {
            IMAGE_FIELD_INDEX => Some(&mut self.image_path),
            index => FieldId::from_index(index).map(|id| self.field_mut(id)),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        FieldId::from_index(self.active_field_index)
            .is_some_and(|id| self.field(id).is_multiline)
    }
}
