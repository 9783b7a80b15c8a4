use promptcraft_core::{Choice, GenerationRequest};

/// Append the user's need and chosen options, one `KEY: value` line each.
pub fn append_request(prompt: &mut String, req: &GenerationRequest) {
    prompt.push_str(&format!("USER REQUEST: {}\n", req.need.trim()));
    prompt.push_str(&format!("PURPOSE: {}\n", req.purpose.as_str()));
    prompt.push_str(&format!("TONE: {}\n", req.tone.as_str()));
    prompt.push_str(&format!("COMPLEXITY: {}\n", req.complexity.as_str()));
    prompt.push_str(&format!("AUDIENCE: {}\n", req.audience.as_str()));
}
