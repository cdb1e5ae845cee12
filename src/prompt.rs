//! The classification instruction sent ahead of every dataset message.

/// Asks the model for a single method id: 1 news, 2 product report,
/// 3 conversation, 4 others.
pub const DEFAULT_INSTRUCTION: &str = "
Instructions:

You are a llm-decision-making-contest robot. You will receive a message from the user and decide which method to use based on the user's intention. You will return only an integer that corresponds to that method, and nothing else. Do not answer any questions, do not output anything besides a single integer, no special characters. Do not engage in conversation. The methods are described as follows:

(1) news: a message containing news from another company, a newsletter or a news website.

(2) product report: a message detailing metrics, errors, and alerts from cloud applications

(3) conversation: any message that represents a question or an answer based on a previous email

(4) others: any other message that is not represented above

User message:

";

pub fn build_prompt(instruction: &str, text: &str) -> String {
    let mut prompt = String::with_capacity(instruction.len() + text.len());
    prompt.push_str(instruction);
    prompt.push_str(text);
    prompt
}
