//! Static question content for the ten competency attributes.
//!
//! Question ids double as form field keys and persisted answer keys, so they
//! must stay stable across releases. Visibility predicates only ever point at
//! a question in the same attribute.

use crate::models::domain::attribute::{
    AnswerPattern, AttributeDefinition, ConditionalLogic, ConditionalQuestionSet, Question,
    QuestionType, ScaleDescriptions, ScoreRange, ShowIfAnswer,
};

fn question(
    id: &str,
    text: &str,
    question_type: QuestionType,
    options: &[&str],
    is_required: bool,
) -> Question {
    Question {
        id: id.to_string(),
        question_text: text.to_string(),
        question_type,
        options: options.iter().map(|o| o.to_string()).collect(),
        is_required,
        conditional_logic: None,
    }
}

fn single(id: &str, text: &str, options: &[&str], required: bool) -> Question {
    question(id, text, QuestionType::SingleSelect, options, required)
}

fn multi(id: &str, text: &str, options: &[&str], required: bool) -> Question {
    question(id, text, QuestionType::MultiSelect, options, required)
}

fn yes_no(id: &str, text: &str, required: bool) -> Question {
    question(id, text, QuestionType::YesNo, &[], required)
}

fn free_text(id: &str, text: &str, required: bool) -> Question {
    question(id, text, QuestionType::Text, &[], required)
}

/// Show this question only when the driver was answered with `expected`.
fn show_if(mut q: Question, driver: &str, expected: &str) -> Question {
    q.conditional_logic = Some(ConditionalLogic {
        show_if_answer: ShowIfAnswer {
            question_id: driver.to_string(),
            answer_value: AnswerPattern::Scalar(expected.to_string()),
        },
    });
    q
}

/// Show this question when the driver's answer matches any of `expected`.
fn show_if_any(mut q: Question, driver: &str, expected: &[&str]) -> Question {
    q.conditional_logic = Some(ConditionalLogic {
        show_if_answer: ShowIfAnswer {
            question_id: driver.to_string(),
            answer_value: AnswerPattern::ScalarSet(
                expected.iter().map(|e| e.to_string()).collect(),
            ),
        },
    });
    q
}

fn band(score_range: ScoreRange, questions: Vec<Question>) -> ConditionalQuestionSet {
    ConditionalQuestionSet {
        score_range,
        questions,
    }
}

fn scale(
    excellent: &str,
    good: &str,
    below_expectation: &str,
    poor: &str,
) -> ScaleDescriptions {
    ScaleDescriptions {
        excellent: excellent.to_string(),
        good: good.to_string(),
        below_expectation: below_expectation.to_string(),
        poor: poor.to_string(),
    }
}

pub(super) fn attributes() -> Vec<AttributeDefinition> {
    vec![
        reliability(),
        accountability(),
        quality_of_work(),
        taking_initiative(),
        adaptability(),
        problem_solving(),
        teamwork(),
        continuous_improvement(),
        communication_skills(),
        leadership(),
    ]
}

fn reliability() -> AttributeDefinition {
    AttributeDefinition {
        name: "Reliability".to_string(),
        definition: "Consistently delivers on commitments: shows up prepared, meets deadlines, \
                     and can be counted on without reminders or follow-up."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Commitments are as good as done. Others plan around this person without a second thought.",
            "6-8: Usually delivers on time; occasional slips are communicated early and recovered quickly.",
            "4-5: Needs reminders or follow-up; deadlines slip often enough that others build in buffers.",
            "1-3: Commitments routinely fall through; teammates re-check or redo work to protect deliverables.",
        ),
        base_questions: vec![
            multi(
                "rel_base_1",
                "Which of the following have you observed over the last quarter? Select all that apply.",
                &[
                    "Meets agreed deadlines",
                    "Shows up on time and prepared",
                    "Follows through without reminders",
                    "Communicates early when a commitment is at risk",
                    "Misses deadlines without warning",
                    "Needs frequent follow-up",
                ],
                true,
            ),
            free_text(
                "rel_base_2",
                "Describe a specific commitment this person made recently and how it played out.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    yes_no(
                        "rel_high_1",
                        "Do others on the team explicitly rely on this person for time-critical work?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "rel_high_2",
                            "Give an example of time-critical work that was routed to them because of their reliability.",
                            true,
                        ),
                        "rel_high_1",
                        "Yes",
                    ),
                    single(
                        "rel_high_3",
                        "How often do they flag risk on a commitment before anyone has to ask?",
                        &["Always", "Usually", "Sometimes", "Rarely"],
                        true,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "rel_mid_1",
                        "What most often separates them from a 9 or 10?",
                        &[
                            "Occasional missed deadlines",
                            "Needs reminders on smaller tasks",
                            "Inconsistent preparation",
                            "Late risk communication",
                            "Other",
                        ],
                        true,
                    ),
                    show_if(
                        free_text(
                            "rel_mid_2",
                            "You selected Other. What is the gap?",
                            true,
                        ),
                        "rel_mid_1",
                        "Other",
                    ),
                    show_if_any(
                        single(
                            "rel_mid_3",
                            "When a deadline slips, how soon do they surface it?",
                            &[
                                "Before the deadline",
                                "At the deadline",
                                "Only when asked",
                            ],
                            true,
                        ),
                        "rel_mid_1",
                        &["Occasional missed deadlines", "Late risk communication"],
                    ),
                    yes_no(
                        "rel_mid_4",
                        "Would a clearer prioritization system likely close the gap?",
                        true,
                    ),
                    free_text(
                        "rel_mid_5",
                        "Anything else a coach should know about their reliability?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "rel_low_1",
                        "How frequently do commitments fall through?",
                        &["Weekly", "A few times a month", "Monthly", "Less often"],
                        true,
                    ),
                    multi(
                        "rel_low_2",
                        "Where does the impact land? Select all that apply.",
                        &[
                            "Teammates absorb extra work",
                            "Deadlines slip downstream",
                            "Customer relationships",
                            "Rework or quality issues",
                            "Team morale",
                        ],
                        true,
                    ),
                    show_if(
                        free_text(
                            "rel_low_3",
                            "Describe the customer-facing impact you have seen.",
                            true,
                        ),
                        "rel_low_2",
                        "Customer relationships",
                    ),
                    yes_no(
                        "rel_low_4",
                        "Has anyone discussed this pattern with them directly?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "rel_low_5",
                            "What changed after that conversation, if anything?",
                            true,
                        ),
                        "rel_low_4",
                        "Yes",
                    ),
                    free_text(
                        "rel_low_6",
                        "What support do you think would help most?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn accountability() -> AttributeDefinition {
    AttributeDefinition {
        name: "Accountability".to_string(),
        definition: "Owns outcomes, not just tasks: acknowledges mistakes without prompting, \
                     fixes them, and does not deflect blame onto circumstances or teammates."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Owns wins and losses equally; raises their own misses before anyone else notices.",
            "6-8: Takes ownership when asked; mistakes are acknowledged, though sometimes with qualifiers.",
            "4-5: Ownership is selective; explanations tend toward circumstances rather than actions.",
            "1-3: Deflects blame as a pattern; misses are discovered by others and disputed rather than owned.",
        ),
        base_questions: vec![
            multi(
                "acct_base_1",
                "Which behaviors have you observed? Select all that apply.",
                &[
                    "Admits mistakes without being prompted",
                    "Proposes the fix alongside the admission",
                    "Owns team outcomes, not just personal tasks",
                    "Waits for others to surface problems",
                    "Explains misses as someone else's fault",
                ],
                true,
            ),
            free_text(
                "acct_base_2",
                "Describe how this person handled a recent mistake or miss.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    yes_no(
                        "acct_high_1",
                        "Have you seen them take ownership for a failure that was only partly theirs?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "acct_high_2",
                            "Briefly describe that situation.",
                            true,
                        ),
                        "acct_high_1",
                        "Yes",
                    ),
                    single(
                        "acct_high_3",
                        "Does their ownership extend to unglamorous follow-through (postmortems, cleanup)?",
                        &["Consistently", "Usually", "Occasionally"],
                        true,
                    ),
                    free_text(
                        "acct_high_4",
                        "What makes their accountability stand out from their peers?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "acct_mid_1",
                        "Where does their accountability most often thin out?",
                        &[
                            "Shared or ambiguous ownership",
                            "High-pressure situations",
                            "Work they consider low priority",
                            "When the miss is public",
                            "Other",
                        ],
                        true,
                    ),
                    show_if(
                        free_text("acct_mid_2", "You selected Other. Where does it thin out?", true),
                        "acct_mid_1",
                        "Other",
                    ),
                    yes_no(
                        "acct_mid_3",
                        "When they do own a miss, do they follow through on the fix?",
                        true,
                    ),
                    show_if(
                        single(
                            "acct_mid_4",
                            "What usually stalls the follow-through?",
                            &["Competing priorities", "Loses track", "Waits for direction"],
                            true,
                        ),
                        "acct_mid_3",
                        "No",
                    ),
                    free_text(
                        "acct_mid_5",
                        "Anything else a coach should know?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "acct_low_1",
                        "What does the deflection most often look like?",
                        &[
                            "Blaming teammates",
                            "Blaming process or tooling",
                            "Minimizing the impact",
                            "Going quiet until it blows over",
                        ],
                        true,
                    ),
                    show_if_any(
                        yes_no(
                            "acct_low_2",
                            "Has this damaged trust with specific teammates?",
                            true,
                        ),
                        "acct_low_1",
                        &["Blaming teammates", "Minimizing the impact"],
                    ),
                    show_if(
                        free_text(
                            "acct_low_3",
                            "Describe the trust impact without naming names.",
                            true,
                        ),
                        "acct_low_2",
                        "Yes",
                    ),
                    single(
                        "acct_low_4",
                        "How do they respond to direct feedback about ownership?",
                        &["Receptive", "Defensive", "Dismissive", "Have not seen it given"],
                        true,
                    ),
                    free_text(
                        "acct_low_5",
                        "What would you want a coach to address first?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn quality_of_work() -> AttributeDefinition {
    AttributeDefinition {
        name: "Quality of Work".to_string(),
        definition: "Produces work that holds up: thorough, accurate, and finished to the \
                     standard the situation requires, without someone else polishing it."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Work is a reference point for the team; reviewers rarely find anything material.",
            "6-8: Solid and dependable output; occasional gaps are minor and caught in normal review.",
            "4-5: Output regularly needs another pass; reviewers budget time for corrections.",
            "1-3: Work product cannot be used as delivered; rework is the norm rather than the exception.",
        ),
        base_questions: vec![
            multi(
                "qow_base_1",
                "Which of these describe their typical output? Select all that apply.",
                &[
                    "Thorough and complete on first delivery",
                    "Accurate details and data",
                    "Appropriate level of polish for the audience",
                    "Frequent small errors",
                    "Needs significant rework",
                ],
                true,
            ),
            free_text(
                "qow_base_2",
                "Describe a recent piece of their work and the state it arrived in.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    yes_no(
                        "qow_high_1",
                        "Is their work used as an example or template by others?",
                        true,
                    ),
                    show_if(
                        free_text("qow_high_2", "Which work, and by whom?", true),
                        "qow_high_1",
                        "Yes",
                    ),
                    single(
                        "qow_high_3",
                        "Do they maintain this standard under deadline pressure?",
                        &["Yes, consistently", "Mostly", "Quality dips under pressure"],
                        true,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    multi(
                        "qow_mid_1",
                        "Where do the gaps usually show up? Select all that apply.",
                        &[
                            "Edge cases and details",
                            "Documentation or handoff notes",
                            "Consistency across deliverables",
                            "Final polish",
                            "Verifying their own work",
                        ],
                        true,
                    ),
                    show_if(
                        yes_no(
                            "qow_mid_2",
                            "Would a self-review checklist meaningfully help?",
                            true,
                        ),
                        "qow_mid_1",
                        "Verifying their own work",
                    ),
                    single(
                        "qow_mid_3",
                        "How do they respond to review feedback?",
                        &[
                            "Incorporates it and improves",
                            "Fixes the instance but repeats the pattern",
                            "Pushes back more than is useful",
                        ],
                        true,
                    ),
                    free_text(
                        "qow_mid_4",
                        "Anything else about their quality a coach should know?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "qow_low_1",
                        "What is the dominant failure mode?",
                        &[
                            "Incomplete work presented as done",
                            "Factual or data errors",
                            "Ignores known standards",
                            "Rushes to finish at the expense of quality",
                        ],
                        true,
                    ),
                    single(
                        "qow_low_2",
                        "How often does their work require rework by others?",
                        &["Almost always", "Often", "Sometimes"],
                        true,
                    ),
                    yes_no(
                        "qow_low_3",
                        "Do they know what the expected standard is?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "qow_low_4",
                            "They know the standard but miss it. What do you think is going on?",
                            true,
                        ),
                        "qow_low_3",
                        "Yes",
                    ),
                    show_if(
                        free_text(
                            "qow_low_5",
                            "What would make the standard clearer for them?",
                            true,
                        ),
                        "qow_low_3",
                        "No",
                    ),
                    free_text("qow_low_6", "Other observations, if any.", false),
                ],
            ),
        ],
    }
}

fn taking_initiative() -> AttributeDefinition {
    AttributeDefinition {
        name: "Taking Initiative".to_string(),
        definition: "Acts without being told: spots problems and opportunities, starts on them, \
                     and pulls in others when the work needs it."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Finds and fixes problems nobody assigned; regularly creates work that moves the team forward.",
            "6-8: Picks things up willingly once spotted; occasionally originates improvements on their own.",
            "4-5: Waits for direction; executes assigned work but rarely looks beyond it.",
            "1-3: Avoids anything outside explicit instructions, even when a problem is obvious and theirs to catch.",
        ),
        base_questions: vec![
            multi(
                "init_base_1",
                "Which have you observed? Select all that apply.",
                &[
                    "Starts on problems before being asked",
                    "Proposes improvements to how the team works",
                    "Volunteers for unowned work",
                    "Waits to be told what to do",
                    "Raises problems but leaves them for others",
                ],
                true,
            ),
            free_text(
                "init_base_2",
                "Describe something they started on their own initiative this quarter.",
                false,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    single(
                        "init_high_1",
                        "What is the typical scope of what they initiate?",
                        &[
                            "Team-level or larger improvements",
                            "Their own area, done exceptionally",
                            "Both",
                        ],
                        true,
                    ),
                    yes_no(
                        "init_high_2",
                        "Do they finish what they start, or mostly open threads?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "init_high_3",
                            "Which initiative landed the most impact, and what was it?",
                            false,
                        ),
                        "init_high_2",
                        "Yes",
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "init_mid_1",
                        "What usually holds them back from initiating more?",
                        &[
                            "Unsure of authority to act",
                            "Fully loaded with assigned work",
                            "Hesitant to step on toes",
                            "Doesn't spot the opportunities",
                            "Other",
                        ],
                        true,
                    ),
                    show_if(
                        free_text("init_mid_2", "You selected Other. What holds them back?", true),
                        "init_mid_1",
                        "Other",
                    ),
                    show_if_any(
                        yes_no(
                            "init_mid_3",
                            "Would explicit permission or a clearer charter change their behavior?",
                            true,
                        ),
                        "init_mid_1",
                        &["Unsure of authority to act", "Hesitant to step on toes"],
                    ),
                    free_text(
                        "init_mid_4",
                        "Describe a moment where they almost took initiative but didn't.",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "init_low_1",
                        "When a visible problem sits in their area, what typically happens?",
                        &[
                            "They mention it but don't act",
                            "They act only when assigned",
                            "It goes unnoticed",
                        ],
                        true,
                    ),
                    yes_no(
                        "init_low_2",
                        "Have they been explicitly told that initiative is expected?",
                        true,
                    ),
                    show_if(
                        single(
                            "init_low_3",
                            "How did they respond to that expectation?",
                            &["Tried briefly, then reverted", "No visible change", "Pushed back"],
                            true,
                        ),
                        "init_low_2",
                        "Yes",
                    ),
                    free_text(
                        "init_low_4",
                        "What is your read on the root cause?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn adaptability() -> AttributeDefinition {
    AttributeDefinition {
        name: "Adaptability".to_string(),
        definition: "Handles change without losing effectiveness: adjusts to shifting \
                     priorities, new tools, and revised plans while keeping output steady."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Change is a non-event; they reorient fast and help others do the same.",
            "6-8: Adjusts with a short ramp; some friction on large changes but lands well.",
            "4-5: Change costs visible productivity; needs support to reorient and resists quietly.",
            "1-3: Actively resists change; effectiveness drops sharply and stays down.",
        ),
        base_questions: vec![
            multi(
                "adapt_base_1",
                "During recent changes, which have you observed? Select all that apply.",
                &[
                    "Adjusted plans quickly without drama",
                    "Helped others through the change",
                    "Stayed productive during the transition",
                    "Needed extended time to adjust",
                    "Complained or resisted visibly",
                ],
                true,
            ),
            free_text(
                "adapt_base_2",
                "Describe how they handled the most significant recent change.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    yes_no(
                        "adapt_high_1",
                        "Have they helped teammates navigate a change, beyond handling their own part?",
                        true,
                    ),
                    show_if(
                        free_text("adapt_high_2", "How did they help?", true),
                        "adapt_high_1",
                        "Yes",
                    ),
                    single(
                        "adapt_high_3",
                        "How do they treat ambiguity while a change is still settling?",
                        &[
                            "Makes sensible calls and keeps moving",
                            "Seeks clarity first, then moves fast",
                            "Comfortable but slower",
                        ],
                        true,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "adapt_mid_1",
                        "Which kind of change costs them the most?",
                        &[
                            "Priority shifts mid-task",
                            "New tools or processes",
                            "Team or role changes",
                            "Strategy reversals",
                        ],
                        true,
                    ),
                    single(
                        "adapt_mid_2",
                        "How long does the adjustment ramp typically last?",
                        &["Days", "A week or two", "Longer"],
                        true,
                    ),
                    yes_no(
                        "adapt_mid_3",
                        "Once adjusted, do they return to full effectiveness?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "adapt_mid_4",
                            "What lingers after the adjustment?",
                            true,
                        ),
                        "adapt_mid_3",
                        "No",
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "adapt_low_1",
                        "What does the resistance look like?",
                        &[
                            "Open pushback in meetings",
                            "Quiet non-adoption",
                            "Negativity that spreads to others",
                            "Paralysis until forced",
                        ],
                        true,
                    ),
                    show_if(
                        yes_no(
                            "adapt_low_2",
                            "Has the negativity measurably affected team mood or adoption?",
                            true,
                        ),
                        "adapt_low_1",
                        "Negativity that spreads to others",
                    ),
                    single(
                        "adapt_low_3",
                        "Is the pattern specific to certain changes or general?",
                        &["Specific kinds of change", "General"],
                        true,
                    ),
                    show_if(
                        free_text(
                            "adapt_low_4",
                            "Which kinds of change trigger it?",
                            true,
                        ),
                        "adapt_low_3",
                        "Specific kinds of change",
                    ),
                    free_text(
                        "adapt_low_5",
                        "What support might actually move the needle?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn problem_solving() -> AttributeDefinition {
    AttributeDefinition {
        name: "Problem Solving".to_string(),
        definition: "Works problems to the root: breaks them down, weighs options, and lands \
                     on solutions that hold instead of patches that reappear."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Tackles the hardest problems on the team; solutions address causes and stick.",
            "6-8: Solid on familiar problems; may need support framing novel or ambiguous ones.",
            "4-5: Defaults to surface fixes; the same problems tend to come back.",
            "1-3: Escalates or stalls on most problems; rarely produces a workable path forward.",
        ),
        base_questions: vec![
            multi(
                "prob_base_1",
                "When facing problems, which have you observed? Select all that apply.",
                &[
                    "Breaks problems into parts before acting",
                    "Digs for root causes",
                    "Weighs more than one option",
                    "Jumps to the first available fix",
                    "Escalates without attempting a solution",
                ],
                true,
            ),
            free_text(
                "prob_base_2",
                "Describe a problem they worked recently and how they approached it.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    yes_no(
                        "prob_high_1",
                        "Do others bring their hardest problems to this person?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "prob_high_2",
                            "Give an example of a problem brought to them and the outcome.",
                            true,
                        ),
                        "prob_high_1",
                        "Yes",
                    ),
                    single(
                        "prob_high_3",
                        "Do their solutions account for second-order effects?",
                        &["Consistently", "Usually", "Sometimes"],
                        true,
                    ),
                    free_text(
                        "prob_high_4",
                        "What distinguishes their problem solving from a typical strong performer?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "prob_mid_1",
                        "Where does their problem solving most often fall short?",
                        &[
                            "Framing ambiguous problems",
                            "Stopping at the first plausible cause",
                            "Over-engineering simple fixes",
                            "Slow to decide between options",
                        ],
                        true,
                    ),
                    show_if_any(
                        yes_no(
                            "prob_mid_2",
                            "Does pairing with a stronger problem-solver noticeably lift their work?",
                            true,
                        ),
                        "prob_mid_1",
                        &["Framing ambiguous problems", "Stopping at the first plausible cause"],
                    ),
                    single(
                        "prob_mid_3",
                        "On familiar, well-scoped problems, how do they do?",
                        &["Excellent", "Good", "Inconsistent"],
                        true,
                    ),
                    free_text("prob_mid_4", "Anything else a coach should know?", false),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "prob_low_1",
                        "What typically happens when they hit a problem?",
                        &[
                            "Immediate escalation",
                            "A quick patch that doesn't hold",
                            "Spinning without progress",
                            "Avoidance",
                        ],
                        true,
                    ),
                    yes_no(
                        "prob_low_2",
                        "Have recurring problems traced back to their patches?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "prob_low_3",
                            "Describe one recurrence and its cost.",
                            true,
                        ),
                        "prob_low_2",
                        "Yes",
                    ),
                    single(
                        "prob_low_4",
                        "Is this a skill gap, a confidence gap, or an effort gap, in your read?",
                        &["Skill", "Confidence", "Effort", "Unsure"],
                        true,
                    ),
                    free_text(
                        "prob_low_5",
                        "What kind of problems, if any, do they handle well?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn teamwork() -> AttributeDefinition {
    AttributeDefinition {
        name: "Teamwork".to_string(),
        definition: "Makes the team better: shares information freely, helps without keeping \
                     score, and puts team outcomes ahead of individual credit."
            .to_string(),
        scale_descriptions: scale(
            "9-10: A multiplier; people want them on their projects and the team works better when they're in it.",
            "6-8: A dependable collaborator; contributes well within their lane and helps when asked.",
            "4-5: Works adjacent to the team rather than with it; information flows only when pulled.",
            "1-3: Creates friction; hoards information, keeps score, or undermines shared outcomes.",
        ),
        base_questions: vec![
            multi(
                "team_base_1",
                "Which have you observed? Select all that apply.",
                &[
                    "Shares information proactively",
                    "Helps teammates without being asked",
                    "Gives credit to others",
                    "Works in isolation",
                    "Creates friction in collaboration",
                ],
                true,
            ),
            free_text(
                "team_base_2",
                "Describe a recent collaboration involving this person.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    single(
                        "team_high_1",
                        "What is their biggest team contribution?",
                        &[
                            "Unblocking others",
                            "Raising the bar on shared work",
                            "Connecting people and information",
                            "Steadying the team under pressure",
                        ],
                        true,
                    ),
                    yes_no(
                        "team_high_2",
                        "Do they sacrifice individual visibility for team outcomes when it matters?",
                        true,
                    ),
                    show_if(
                        free_text("team_high_3", "Give an example.", false),
                        "team_high_2",
                        "Yes",
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "team_mid_1",
                        "What would move them from good to great as a teammate?",
                        &[
                            "More proactive communication",
                            "Offering help before being asked",
                            "More openness to others' approaches",
                            "Engaging beyond their immediate lane",
                            "Other",
                        ],
                        true,
                    ),
                    show_if(
                        free_text("team_mid_2", "You selected Other. What would it be?", true),
                        "team_mid_1",
                        "Other",
                    ),
                    yes_no(
                        "team_mid_3",
                        "Is the gap consistent, or does it depend on who they're working with?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "team_mid_4",
                            "It depends on the people. What's the pattern?",
                            true,
                        ),
                        "team_mid_3",
                        "No",
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    multi(
                        "team_low_1",
                        "Which behaviors are causing the friction? Select all that apply.",
                        &[
                            "Withholding information",
                            "Dismissing others' input",
                            "Taking credit for shared work",
                            "Refusing to help outside their tasks",
                            "Conflict that goes personal",
                        ],
                        true,
                    ),
                    show_if(
                        yes_no(
                            "team_low_2",
                            "Has the personal conflict required intervention?",
                            true,
                        ),
                        "team_low_1",
                        "Conflict that goes personal",
                    ),
                    single(
                        "team_low_3",
                        "How widespread is the friction?",
                        &["One or two relationships", "Most of the team", "Cross-team as well"],
                        true,
                    ),
                    yes_no(
                        "team_low_4",
                        "Do they recognize the impact they're having?",
                        true,
                    ),
                    free_text(
                        "team_low_5",
                        "What would you want addressed first?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn continuous_improvement() -> AttributeDefinition {
    AttributeDefinition {
        name: "Continuous Improvement".to_string(),
        definition: "Gets better on purpose: seeks feedback, closes their own gaps, and \
                     improves the work around them rather than repeating last quarter."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Visibly better every quarter; turns feedback into change and drags the team's bar up with them.",
            "6-8: Open to feedback and improves steadily, mostly within their existing strengths.",
            "4-5: Accepts feedback politely but little changes; growth requires external pressure.",
            "1-3: Resists feedback; skills and habits are where they were a year ago or worse.",
        ),
        base_questions: vec![
            multi(
                "ci_base_1",
                "Which have you observed? Select all that apply.",
                &[
                    "Asks for feedback unprompted",
                    "Acts visibly on feedback received",
                    "Learns new skills relevant to the work",
                    "Improves team processes, not just their own",
                    "Repeats known mistakes",
                ],
                true,
            ),
            free_text(
                "ci_base_2",
                "Describe a way this person has grown (or not) over the past two quarters.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    single(
                        "ci_high_1",
                        "Where is their improvement most visible?",
                        &[
                            "Technical or craft skills",
                            "Communication and influence",
                            "Team processes they've improved",
                            "All of the above",
                        ],
                        true,
                    ),
                    yes_no(
                        "ci_high_2",
                        "Do they share what they learn so others improve too?",
                        true,
                    ),
                    show_if(
                        free_text("ci_high_3", "How do they share it?", false),
                        "ci_high_2",
                        "Yes",
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "ci_mid_1",
                        "What limits their improvement most?",
                        &[
                            "Stays inside their comfort zone",
                            "Feedback lands but fades",
                            "No deliberate development plan",
                            "Time pressure crowds out learning",
                        ],
                        true,
                    ),
                    show_if(
                        yes_no(
                            "ci_mid_2",
                            "Would a concrete development plan with checkpoints likely stick?",
                            true,
                        ),
                        "ci_mid_1",
                        "No deliberate development plan",
                    ),
                    single(
                        "ci_mid_3",
                        "How do they react when a weakness is named specifically?",
                        &["Engages and works on it", "Acknowledges, limited action", "Deflects"],
                        true,
                    ),
                    free_text("ci_mid_4", "Anything else a coach should know?", false),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "ci_low_1",
                        "What happens when they receive critical feedback?",
                        &[
                            "Agrees, then nothing changes",
                            "Argues with the feedback",
                            "Takes it personally",
                            "Avoids situations where they'd get it",
                        ],
                        true,
                    ),
                    yes_no(
                        "ci_low_2",
                        "Has the same feedback been delivered more than once?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "ci_low_3",
                            "What was the repeated feedback about?",
                            true,
                        ),
                        "ci_low_2",
                        "Yes",
                    ),
                    single(
                        "ci_low_4",
                        "Is their current skill level a problem for their role today?",
                        &["Yes, actively", "Not yet, but the gap is widening", "No"],
                        true,
                    ),
                    free_text(
                        "ci_low_5",
                        "What approach might actually reach them?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn communication_skills() -> AttributeDefinition {
    AttributeDefinition {
        name: "Communication Skills".to_string(),
        definition: "Gets the message across: clear and timely in writing and speech, listens \
                     as well as they talk, and matches the message to the audience."
            .to_string(),
        scale_descriptions: scale(
            "9-10: Communication is an asset; complex topics land clearly with any audience, and they listen first.",
            "6-8: Generally clear and timely; occasional misses on audience, tone, or proactive updates.",
            "4-5: Communication requires effort from the receiver; updates are late, unclear, or missing context.",
            "1-3: Communication actively causes problems; messages confuse, escalate, or simply don't happen.",
        ),
        base_questions: vec![
            multi(
                "comm_base_1",
                "Which have you observed? Select all that apply.",
                &[
                    "Clear and concise in writing",
                    "Clear and concise speaking",
                    "Listens and incorporates what they hear",
                    "Updates stakeholders proactively",
                    "Messages are hard to follow",
                    "Important updates arrive late or not at all",
                ],
                true,
            ),
            free_text(
                "comm_base_2",
                "Describe a recent communication from this person that stuck with you, good or bad.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    single(
                        "comm_high_1",
                        "Where is their communication strongest?",
                        &[
                            "Written documents and updates",
                            "Meetings and presentations",
                            "Difficult one-on-one conversations",
                            "All of the above",
                        ],
                        true,
                    ),
                    yes_no(
                        "comm_high_2",
                        "Have they defused or prevented a conflict through communication?",
                        true,
                    ),
                    show_if(
                        free_text("comm_high_3", "Briefly describe it.", true),
                        "comm_high_2",
                        "Yes",
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    multi(
                        "comm_mid_1",
                        "Where do the misses happen? Select all that apply.",
                        &[
                            "Writing clarity",
                            "Speaking clarity",
                            "Listening",
                            "Timeliness of updates",
                            "Adjusting to the audience",
                        ],
                        true,
                    ),
                    show_if(
                        single(
                            "comm_mid_2",
                            "When updates are late, what is the usual reason?",
                            &["Waiting for complete information", "Deprioritized", "Forgotten"],
                            true,
                        ),
                        "comm_mid_1",
                        "Timeliness of updates",
                    ),
                    show_if(
                        yes_no(
                            "comm_mid_3",
                            "Does the listening gap affect decisions, or just rapport?",
                            true,
                        ),
                        "comm_mid_1",
                        "Listening",
                    ),
                    free_text("comm_mid_4", "Anything else a coach should know?", false),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "comm_low_1",
                        "What is the most damaging pattern?",
                        &[
                            "Silence: updates don't happen",
                            "Confusion: messages can't be acted on",
                            "Tone: messages create conflict",
                            "Selective: some people get informed, others don't",
                        ],
                        true,
                    ),
                    show_if(
                        yes_no(
                            "comm_low_2",
                            "Has the tone problem come up in feedback from multiple people?",
                            true,
                        ),
                        "comm_low_1",
                        "Tone: messages create conflict",
                    ),
                    single(
                        "comm_low_3",
                        "What has the concrete cost been?",
                        &[
                            "Missed deadlines from poor coordination",
                            "Duplicated or wasted work",
                            "Escalated conflicts",
                            "Stakeholder trust",
                        ],
                        true,
                    ),
                    yes_no(
                        "comm_low_4",
                        "Are they aware their communication is a problem?",
                        true,
                    ),
                    free_text(
                        "comm_low_5",
                        "What single change would help most?",
                        false,
                    ),
                ],
            ),
        ],
    }
}

fn leadership() -> AttributeDefinition {
    AttributeDefinition {
        name: "Leadership".to_string(),
        definition: "Moves people toward an outcome, with or without authority: sets direction, \
                     builds confidence, and makes the people around them more effective."
            .to_string(),
        scale_descriptions: scale(
            "9-10: People follow them by choice; they set direction, develop others, and own hard calls.",
            "6-8: Leads well in their sphere; steps up when asked and is trusted by those closest to them.",
            "4-5: Leads reluctantly or unevenly; influence is limited to positional authority if any.",
            "1-3: Leadership moments go badly; erodes confidence, avoids decisions, or leads in the wrong direction.",
        ),
        base_questions: vec![
            multi(
                "lead_base_1",
                "Which have you observed? Select all that apply.",
                &[
                    "Sets direction others follow",
                    "Develops or mentors teammates",
                    "Makes hard calls and owns them",
                    "Steps up in a vacuum",
                    "Avoids leadership moments",
                    "Undermines others' confidence",
                ],
                true,
            ),
            free_text(
                "lead_base_2",
                "Describe a moment where this person led, formally or informally.",
                true,
            ),
        ],
        conditional_question_sets: vec![
            band(
                ScoreRange::NineToTen,
                vec![
                    single(
                        "lead_high_1",
                        "What kind of leader are they at their best?",
                        &[
                            "Direction-setter",
                            "People developer",
                            "Calm hand in a crisis",
                            "All of the above",
                        ],
                        true,
                    ),
                    yes_no(
                        "lead_high_2",
                        "Have they grown someone else into a bigger role?",
                        true,
                    ),
                    show_if(
                        free_text("lead_high_3", "Who grew, and how did they contribute?", false),
                        "lead_high_2",
                        "Yes",
                    ),
                    single(
                        "lead_high_4",
                        "Is their leadership ready for a larger scope today?",
                        &["Yes", "With targeted development", "Scope is right for now"],
                        true,
                    ),
                ],
            ),
            band(
                ScoreRange::SixToEight,
                vec![
                    single(
                        "lead_mid_1",
                        "What is the main gap between them and a strong leader?",
                        &[
                            "Hesitant on hard calls",
                            "Strong with tasks, weaker with people",
                            "Influence limited beyond their circle",
                            "Inconsistent under pressure",
                            "Other",
                        ],
                        true,
                    ),
                    show_if(
                        free_text("lead_mid_2", "You selected Other. What is the gap?", true),
                        "lead_mid_1",
                        "Other",
                    ),
                    show_if_any(
                        yes_no(
                            "lead_mid_3",
                            "Have they sought out leadership opportunities despite the gap?",
                            true,
                        ),
                        "lead_mid_1",
                        &["Hesitant on hard calls", "Inconsistent under pressure"],
                    ),
                    free_text(
                        "lead_mid_4",
                        "Where would you give them more leadership rope first?",
                        false,
                    ),
                ],
            ),
            band(
                ScoreRange::OneToFive,
                vec![
                    single(
                        "lead_low_1",
                        "What happens in their leadership moments?",
                        &[
                            "Avoids them entirely",
                            "Takes them but decisions don't land",
                            "Leads by pressure rather than trust",
                            "Creates confusion about direction",
                        ],
                        true,
                    ),
                    yes_no(
                        "lead_low_2",
                        "Does the team route around them when direction is needed?",
                        true,
                    ),
                    show_if(
                        free_text(
                            "lead_low_3",
                            "Who do they route to instead, role-wise, and why?",
                            true,
                        ),
                        "lead_low_2",
                        "Yes",
                    ),
                    single(
                        "lead_low_4",
                        "Is leadership part of their current role's expectations?",
                        &["Yes, core to it", "Partially", "No"],
                        true,
                    ),
                    free_text(
                        "lead_low_5",
                        "Anything else that would help a coach here?",
                        false,
                    ),
                ],
            ),
        ],
    }
}
