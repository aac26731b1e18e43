// Prompt constants for nursing note generation.

/// Instruction template wrapped around the patient data. Replace `{patient_data}` before sending.
pub const NURSING_NOTES_PROMPT_TEMPLATE: &str = "You are a professional telemedicine nurse. \
Based on the following patient information, generate nursing notes that are clear, \
concise, and suitable for the patient's medical record.

{patient_data}";

/// Shown instead of calling the model when every field is blank.
pub const EMPTY_INPUT_WARNING: &str = "Please enter some patient details or a prompt.";

/// Fills the template. The patient data is inserted verbatim.
pub fn build_nursing_notes_prompt(patient_data: &str) -> String {
    NURSING_NOTES_PROMPT_TEMPLATE.replace("{patient_data}", patient_data)
}
