pub mod contract;
pub mod request;

use promptcraft_core::GenerationRequest;

const ROLE_LINE: &str =
    "You are an expert prompt engineer. Create the most effective prompt template for this request:";

/// Assemble the full instruction sent to the completion provider.
pub fn assemble_prompt(req: &GenerationRequest) -> String {
    let mut prompt = String::new();
    prompt.push_str(ROLE_LINE);
    prompt.push_str("\n\n");
    request::append_request(&mut prompt, req);
    prompt.push('\n');
    contract::append_instructions(&mut prompt);
    prompt
}
