//! Task prompt construction
//!
//! Builds the natural-language instruction handed to the agent for each
//! target URL, and normalizes bare domains into browsable URLs.

use crate::email::derive_email;

/// Normalize a target for the agent browser.
///
/// Bare domains get a default `http://` scheme and a `www.` host label;
/// URLs that already carry a scheme pass through unchanged.
pub fn normalize_target_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with("www.") {
        format!("http://{}", url)
    } else {
        format!("http://www.{}", url)
    }
}

/// Build the signup task instruction for one URL.
///
/// Embeds the derived contact email and the fixed identity data. Once
/// `captcha_failures` reaches `skip_threshold` the instruction tells the
/// agent to give up on captchas and move on.
pub fn build_task_prompt(target_url: &str, captcha_failures: u32, skip_threshold: u32) -> String {
    let email = derive_email(target_url);
    let captcha_clause = if captcha_failures >= skip_threshold {
        "AFTER 5 CAPTCHA FAILURES, SKIP TO THE NEXT PAGE"
    } else {
        ""
    };

    format!(
        r#"
Visit the URL: {target_url}

Your task is to find and successfully submit a newsletter signup, contact, or subscription form. Follow these steps carefully:

STEP 1 - FORM DETECTION:
Search thoroughly for forms containing any of these keywords (in any language):
- Newsletter, subscribe, subscription, abonnieren, anmelden
- Contact, kontakt, kontaktformular, contact form
- Email signup, email list, mailing list
- Register, registration, registrierung
- Stay updated, get updates, news updates

STEP 2 - FORM ANALYSIS:
Before filling, analyze the form to identify:
- Required fields (marked with * or "required")
- Email field
- Name fields (first name, last name, full name)
- Any checkboxes for consent/privacy policy
- Submit button location

STEP 3 - FORM FILLING:
Fill the form with this exact information:
- First Name: Max
- Last Name: Plugilo
- Full Name: Max Plugilo
- Email: {email}
- Any other text fields: Use appropriate placeholder text

STEP 4 - CONSENT AND SUBMISSION:
- Check ALL required checkboxes (privacy policy, terms, consent, etc.)
- Look for GDPR consent checkboxes and check them
- Click the submit/send/register button
- Wait for confirmation or success message

STEP 5 - VERIFICATION:
After submission, look for:
- Success messages
- Confirmation pages
- "Thank you" messages
- Email verification notices
- Any indication the form was successfully submitted

IMPORTANT REQUIREMENTS:
- Be persistent - try multiple approaches if the first attempt fails
- Handle pop-ups, cookie banners, or overlays that might block the form
- If you encounter a captcha, attempt to solve it
- Wait for page loads between actions
- If no form is found after thorough searching, clearly state "NO FORM FOUND"
- If form submission fails, try alternative submit buttons or methods

{captcha_clause}

Report your final status clearly at the end.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_domain() {
        assert_eq!(normalize_target_url("shop1.com"), "http://www.shop1.com");
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(
            normalize_target_url("https://shop1.com/page"),
            "https://shop1.com/page"
        );
        assert_eq!(normalize_target_url("http://shop1.com"), "http://shop1.com");
    }

    #[test]
    fn test_normalize_keeps_existing_www() {
        assert_eq!(
            normalize_target_url("www.shop1.com"),
            "http://www.shop1.com"
        );
    }

    #[test]
    fn test_prompt_embeds_target_and_email() {
        let prompt = build_task_prompt("http://www.shop1.com", 0, 5);
        assert!(prompt.contains("Visit the URL: http://www.shop1.com"));
        assert!(prompt.contains("news-shop1.com@plugilo.news"));
        assert!(prompt.contains("Max Plugilo"));
    }

    #[test]
    fn test_captcha_clause_only_past_threshold() {
        let calm = build_task_prompt("shop1.com", 4, 5);
        assert!(!calm.contains("SKIP TO THE NEXT PAGE"));

        let exasperated = build_task_prompt("shop1.com", 5, 5);
        assert!(exasperated.contains("AFTER 5 CAPTCHA FAILURES, SKIP TO THE NEXT PAGE"));
    }
}
