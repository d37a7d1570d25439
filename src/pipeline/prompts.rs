//! Prompt construction for the analysis stage.
//!
//! Both prompts are fixed; the only variable input is the extracted
//! report text, interpolated verbatim under `MEDICAL REPORT TEXT:`.
//! Building is pure and deterministic — no I/O, no randomness — so
//! identical extractions always produce identical requests.
//!
//! The template deliberately demands extreme depth on the
//! what's-wrong section and standard depth everywhere else, and it
//! always closes with the see-a-real-doctor reminder.

/// Role-tagged message pair sent to the completion service.
///
/// Constructed fresh per call; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub system: String,
    pub user: String,
}

/// Fixed role definition: seven sections, ordinal severity scale,
/// mandatory disclaimers.
pub const SYSTEM_PROMPT: &str = "\
You are an expert medical AI assistant that analyzes medical reports and provides comprehensive health insights.
Your task is to analyze the medical report and provide:

1. **Problem Identification**: Clearly explain what health issues or conditions are identified
2. **Severity Assessment**: Rate as Normal/Mild/Moderate/Severe with reasoning
3. **Doctor Consultation**: Recommend which type of specialist to consult
4. **Dietary Recommendations**: Suggest specific foods to include/avoid
5. **Precautions & Lifestyle**: List important precautions and lifestyle changes
6. **Treatment Overview**: Explain potential treatment approaches
7. **Follow-up**: Recommend monitoring and follow-up schedule

Important:
- Always include medical disclaimers
- Be clear about when immediate medical attention is needed
- Provide evidence-based recommendations
- Use simple, understandable language
- Structure your response clearly with headings";

/// Build the request payload for one extracted report.
pub fn build_request(report_text: &str) -> AnalysisRequest {
    AnalysisRequest {
        system: SYSTEM_PROMPT.to_string(),
        user: build_user_prompt(report_text),
    }
}

fn build_user_prompt(report_text: &str) -> String {
    format!(
        r#"Please analyze this medical report with EXTREME DETAIL about the medical problems identified. I want very comprehensive explanations about the conditions found, but keep other sections standard length.

MEDICAL REPORT TEXT:
{report_text}

Please provide your analysis in the following format:

## 🔍 WHAT'S WRONG WITH YOUR HEALTH? (DETAILED EXPLANATION)

### **HEALTH PROBLEMS FOUND:**

[For each condition/abnormality, explain:]

**Problem 1: [Name in simple terms, e.g., "High Blood Sugar" instead of "Hyperglycemia"]**

**What is this?**
- Explain in everyday language what this condition means
- Use comparisons to things people understand (like "your blood is like soup that's too thick")
- Avoid medical terms, or if used, immediately explain them in simple words

**How does this affect your body?**
- Describe step-by-step what happens inside your body
- Explain which parts of your body are affected and how
- Use simple analogies (like "your heart works like a pump")
- Describe any symptoms this might cause

**Why did this happen?**
- Explain the most common reasons this occurs
- Use simple cause-and-effect explanations
- Relate to lifestyle, age, genetics, or other easy-to-understand factors

**What do your test numbers mean?**
- Compare your numbers to what's normal (e.g., "Normal is 80-100, yours is 150")
- Explain if this is slightly high, very high, or extremely high
- Use simple comparisons ("This is like having 3 teaspoons of sugar in your blood when you should only have 2")

**Is this serious?**
- Clearly state if this is minor, moderate, or serious
- Explain what could happen if not treated
- Use simple terms about risks

**Problem 2: [If more problems exist]**
[Same detailed, simple explanation for each additional problem]

### **HOW ARE THESE PROBLEMS CONNECTED?**
- Explain in simple terms how different health issues might be related
- Use easy examples of how one problem can cause another
- Help the person understand the "big picture" of their health

### **WHAT DO YOUR TEST RESULTS MEAN?**
[For any lab values or test results:]
- **Your number vs. Normal number**: Clear comparison in simple terms
- **What this means**: Explain without medical jargon
- **Is this good or bad?**: Direct, honest assessment
- **How much off from normal?**: Use percentages or simple comparisons

## ⚠️ HOW SERIOUS IS THIS?
**Level**: [Normal/Mild/Moderate/Severe]
**In Simple Terms**: [Explain severity using everyday language - e.g., "This is like having a warning light on your car dashboard - not an emergency, but needs attention soon"]

## 🏥 WHICH DOCTOR TO SEE
**Type of Doctor**: [Specialist name]
**Why This Doctor**: [Simple explanation of what this doctor specializes in]
**How Soon**: [Urgent/Soon/Routine - with simple explanation]

## 🥗 FOODS THAT HELP OR HURT
**Foods That Will Help You**:
- [List with simple explanations of why each food helps]

**Foods to Avoid**:
- [List with simple explanations of why each food is harmful]

**Easy Diet Tips**: [Simple, practical advice]

## 🛡️ THINGS TO DO AND AVOID
**Important Things to Do Right Now**:
- [Simple, actionable steps]

**Changes to Make in Daily Life**:
- [Easy-to-understand lifestyle changes]

**Activities to Be Careful With**:
- [Clear activity guidelines]

## 💊 TREATMENT - WHAT TO EXPECT
[Explain treatments in simple terms - what they do, how they work, what to expect]

## 📅 FOLLOW-UP - WHAT HAPPENS NEXT
[Simple timeline of what needs to be done and when]

## ⚕️ IMPORTANT REMINDER
This explanation is to help you understand your health better, but you must still see a real doctor. They know your full medical history and can give you proper treatment. Don't make medical decisions based only on this analysis."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Glucose: 150 mg/dL (Normal: 70-100)";

    #[test]
    fn building_is_deterministic() {
        let a = build_request(SAMPLE);
        let b = build_request(SAMPLE);
        assert_eq!(a, b);
    }

    #[test]
    fn report_text_interpolated_verbatim() {
        let request = build_request(SAMPLE);
        assert!(request.user.contains("MEDICAL REPORT TEXT:\nGlucose: 150 mg/dL (Normal: 70-100)"));
    }

    #[test]
    fn system_prompt_lists_seven_sections() {
        for section in [
            "Problem Identification",
            "Severity Assessment",
            "Doctor Consultation",
            "Dietary Recommendations",
            "Precautions & Lifestyle",
            "Treatment Overview",
            "Follow-up",
        ] {
            assert!(SYSTEM_PROMPT.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn severity_scale_is_four_level_ordinal() {
        assert!(SYSTEM_PROMPT.contains("Normal/Mild/Moderate/Severe"));
        let request = build_request(SAMPLE);
        assert!(request.user.contains("[Normal/Mild/Moderate/Severe]"));
    }

    #[test]
    fn disclaimer_always_present() {
        assert!(SYSTEM_PROMPT.contains("medical disclaimers"));
        let request = build_request(SAMPLE);
        assert!(request.user.contains("you must still see a real doctor"));
    }

    #[test]
    fn detailed_problem_section_requested() {
        let request = build_request(SAMPLE);
        assert!(request.user.contains("EXTREME DETAIL"));
        assert!(request.user.contains("WHAT'S WRONG WITH YOUR HEALTH?"));
        assert!(request.user.contains("keep other sections standard length"));
    }

    #[test]
    fn empty_report_text_still_builds() {
        let request = build_request("");
        assert!(request.user.contains("MEDICAL REPORT TEXT:"));
        assert!(!request.system.is_empty());
    }
}
