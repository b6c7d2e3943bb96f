//! Interpretation texts for the 64 hexagrams.

use crate::interpretation::Interpretation;

/// One interpretation per hexagram, indexed by `number - 1`.
pub static INTERPRETATIONS: [Interpretation; 64] = [
    Interpretation {
        number: 1,
        general: "Creative force is at its height and the way ahead is open.",
        career: "Take the lead on ambitious work; your initiative carries others with it.",
        relationship: "Be generous rather than dominant; strength is welcome when it protects.",
        health: "Energy is high, but pace yourself to avoid burnout.",
        advice: "Act with steady purpose and avoid arrogance.",
    },
    Interpretation {
        number: 2,
        general: "Success comes through receptivity, patience and support rather than force.",
        career: "Follow a capable lead and do the groundwork well.",
        relationship: "Devotion and listening deepen the bond.",
        health: "Rest and nourishment restore you; avoid strain.",
        advice: "Yield where it costs little and stay constant.",
    },
    Interpretation {
        number: 3,
        general: "A new beginning is tangled and slow, but growth is underway.",
        career: "Expect early setbacks; gather allies before pushing forward.",
        relationship: "A new connection needs patience before it settles.",
        health: "Minor complaints come from stress; keep routines simple.",
        advice: "Persevere and ask for help instead of forcing a breakthrough.",
    },
    Interpretation {
        number: 4,
        general: "Inexperience clouds judgment; there is much to learn.",
        career: "Seek a mentor and accept instruction humbly.",
        relationship: "Avoid rash promises made out of naivety.",
        health: "Learn what your body needs instead of guessing.",
        advice: "Ask sincere questions once, then listen.",
    },
    Interpretation {
        number: 5,
        general: "The moment is not ripe; calm waiting brings the right opening.",
        career: "Prepare quietly and do not force a decision.",
        relationship: "Trust builds over time; do not rush commitments.",
        health: "Patience aids recovery; follow through on treatment.",
        advice: "Nourish yourself while you wait and stay confident.",
    },
    Interpretation {
        number: 6,
        general: "Conflict is in the air; pressing your case to the end brings loss.",
        career: "Settle disputes early or bring in a fair mediator.",
        relationship: "Arguments harden if neither side yields.",
        health: "Tension shows in the body; let go of grudges.",
        advice: "Seek compromise and avoid starting new ventures now.",
    },
    Interpretation {
        number: 7,
        general: "Organised effort under clear leadership wins through.",
        career: "Discipline and clear roles carry the team.",
        relationship: "Shared goals hold the relationship together.",
        health: "Regular habits and training keep you strong.",
        advice: "Lead fairly and keep everyone in order.",
    },
    Interpretation {
        number: 8,
        general: "Union and mutual support bring good fortune.",
        career: "Join a group whose aims you share; do not hold back too long.",
        relationship: "Commit sincerely to those close to you.",
        health: "Support from others speeds recovery.",
        advice: "Choose your allies well and join them in good time.",
    },
    Interpretation {
        number: 9,
        general: "Small restraints hold back a larger movement for now.",
        career: "Make modest gains and refine details.",
        relationship: "Gentle persuasion works better than confrontation.",
        health: "Minor issues call for small, steady adjustments.",
        advice: "Accept gradual progress; the rain will come.",
    },
    Interpretation {
        number: 10,
        general: "You tread on delicate ground; courtesy keeps you safe.",
        career: "Respect hierarchy and proceed with care.",
        relationship: "Mindful conduct smooths a touchy situation.",
        health: "Be careful with physical risks.",
        advice: "Behave correctly and stay alert to danger.",
    },
    Interpretation {
        number: 11,
        general: "Harmony and prosperity flow between heaven and earth.",
        career: "Cooperation thrives; expand while conditions are good.",
        relationship: "Mutual understanding makes this a happy time.",
        health: "Balance brings well-being.",
        advice: "Enjoy the peace but prepare for change.",
    },
    Interpretation {
        number: 12,
        general: "Stagnation; the channels between people are blocked.",
        career: "Progress stalls; keep integrity and avoid compromise.",
        relationship: "Communication breaks down; give it time.",
        health: "Low vitality; conserve your strength.",
        advice: "Withdraw from bad influences and wait for the turn.",
    },
    Interpretation {
        number: 13,
        general: "Fellowship among equals opens the way.",
        career: "Collaborate openly across groups for shared aims.",
        relationship: "Friendship grows from common values.",
        health: "Community and company lift your spirits.",
        advice: "Seek unity in the open, not in cliques.",
    },
    Interpretation {
        number: 14,
        general: "Great abundance, held with modesty.",
        career: "Success and resources are at hand; use them well.",
        relationship: "Generosity makes relationships flourish.",
        health: "Health is good; avoid excess.",
        advice: "Share your wealth and stay humble.",
    },
    Interpretation {
        number: 15,
        general: "Modesty carries things through to success.",
        career: "Quiet competence earns recognition.",
        relationship: "Humility and respect strengthen the bond.",
        health: "Moderation keeps the body balanced.",
        advice: "Give credit to others and keep things in proportion.",
    },
    Interpretation {
        number: 16,
        general: "Enthusiasm moves people and gathers support.",
        career: "Inspire the team and plan ahead for momentum.",
        relationship: "Shared joy draws people closer.",
        health: "Good spirits aid health, but avoid indulgence.",
        advice: "Harness enthusiasm without becoming complacent.",
    },
    Interpretation {
        number: 17,
        general: "Adapting to the times brings success.",
        career: "Follow good leadership and adjust your plans.",
        relationship: "Let the relationship find its natural rhythm.",
        health: "Rest when needed and follow natural cycles.",
        advice: "Follow what is right, not what is easy.",
    },
    Interpretation {
        number: 18,
        general: "Something has decayed and needs repair.",
        career: "Fix neglected problems and inherited mistakes.",
        relationship: "Address old hurts openly.",
        health: "Deal with long-ignored health issues.",
        advice: "Plan carefully, then work steadily to set things right.",
    },
    Interpretation {
        number: 19,
        general: "Good things approach; the time favours advance.",
        career: "Opportunities open; move forward with care.",
        relationship: "Warmth and care strengthen ties.",
        health: "Vitality is rising.",
        advice: "Make the most of the time but remember that seasons turn.",
    },
    Interpretation {
        number: 20,
        general: "Step back and observe the larger picture.",
        career: "Study the situation before you act.",
        relationship: "Understand the other person's view.",
        health: "Pay attention to the body's signals.",
        advice: "Lead by example and watch carefully.",
    },
    Interpretation {
        number: 21,
        general: "An obstacle must be bitten through decisively.",
        career: "Resolve blockages firmly and fairly.",
        relationship: "Clear up misunderstandings directly.",
        health: "Address problems promptly before they grow.",
        advice: "Act with clarity and just firmness.",
    },
    Interpretation {
        number: 22,
        general: "Beauty and form adorn the substance.",
        career: "Presentation matters, but keep the content solid.",
        relationship: "Charm attracts, but sincerity keeps.",
        health: "Care for yourself inside and out.",
        advice: "Value substance over appearance.",
    },
    Interpretation {
        number: 23,
        general: "Deterioration; the foundations are eroding.",
        career: "Do not start new ventures; protect what you have.",
        relationship: "A relationship may be weakening; avoid forcing it.",
        health: "Rest and protect your health.",
        advice: "Wait quietly; the decline will pass.",
    },
    Interpretation {
        number: 24,
        general: "The turning point; light returns after darkness.",
        career: "Recovery begins; restart gradually.",
        relationship: "Reconciliation becomes possible.",
        health: "Health improves step by step.",
        advice: "Return to what is right and grow slowly.",
    },
    Interpretation {
        number: 25,
        general: "Act without hidden motives and things go well.",
        career: "Work sincerely without scheming for results.",
        relationship: "Be genuine and let things unfold.",
        health: "Natural living supports health.",
        advice: "Do what is right and let the outcome come.",
    },
    Interpretation {
        number: 26,
        general: "Great power is held in check and stored.",
        career: "Build skills and resources before you act.",
        relationship: "Commitment grows through shared endeavour.",
        health: "Build strength through discipline.",
        advice: "Gather your strength and act at the right time.",
    },
    Interpretation {
        number: 27,
        general: "Pay attention to what you take in.",
        career: "Invest in what truly sustains you.",
        relationship: "Care for one another's needs.",
        health: "Watch your diet and your words.",
        advice: "Nourish yourself and others with care.",
    },
    Interpretation {
        number: 28,
        general: "The load is too heavy; a crisis demands action.",
        career: "An overloaded situation needs bold restructuring.",
        relationship: "Strain needs to be relieved.",
        health: "Beware of overexertion.",
        advice: "Act decisively but find balance.",
    },
    Interpretation {
        number: 29,
        general: "Danger repeated; stay true and keep moving like water.",
        career: "Face difficulties with consistency.",
        relationship: "Trust is tested; stay sincere.",
        health: "Take care of chronic stress.",
        advice: "Hold to your principles and keep going.",
    },
    Interpretation {
        number: 30,
        general: "Clarity and warmth depend on what they cling to.",
        career: "Success comes from clear vision and good allies.",
        relationship: "Passion grows when grounded in something lasting.",
        health: "Care for the eyes and the heart.",
        advice: "Stay clear-minded and attach to what is right.",
    },
    Interpretation {
        number: 31,
        general: "Mutual attraction and sincere influence.",
        career: "Gentle persuasion opens doors.",
        relationship: "Strong mutual attraction.",
        health: "Emotional balance supports health.",
        advice: "Stay open and receptive to others.",
    },
    Interpretation {
        number: 32,
        general: "Endurance and consistency over time.",
        career: "Steady commitment brings lasting success.",
        relationship: "A stable, enduring partnership.",
        health: "Consistent routines keep you healthy.",
        advice: "Stay the course and keep your commitments.",
    },
    Interpretation {
        number: 33,
        general: "Retreat strategically from a losing position.",
        career: "Step back from power struggles.",
        relationship: "Give each other space.",
        health: "Rest and withdraw to recover.",
        advice: "Retreat with dignity, not in panic.",
    },
    Interpretation {
        number: 34,
        general: "Great strength must be used with restraint.",
        career: "You have influence; use it responsibly.",
        relationship: "Strength should protect, not dominate.",
        health: "Vigour is high; avoid reckless exertion.",
        advice: "Be strong but just.",
    },
    Interpretation {
        number: 35,
        general: "Steady progress and rising recognition.",
        career: "Advancement and acknowledgement come.",
        relationship: "The relationship moves forward.",
        health: "Health improves with sunlight and activity.",
        advice: "Advance with integrity.",
    },
    Interpretation {
        number: 36,
        general: "Darkness prevails; keep your light hidden.",
        career: "Stay quiet in a hostile environment.",
        relationship: "Guard your inner feelings for now.",
        health: "Protect your health during a hard time.",
        advice: "Persevere inwardly and wait for dawn.",
    },
    Interpretation {
        number: 37,
        general: "Each member plays their role well.",
        career: "Clear roles create a productive team.",
        relationship: "Loyalty and care strengthen the home.",
        health: "Family support aids well-being.",
        advice: "Cultivate order and affection at home.",
    },
    Interpretation {
        number: 38,
        general: "Differences divide, yet small things still go well.",
        career: "Work around disagreements patiently.",
        relationship: "Opposing views can complement each other.",
        health: "Inner conflict affects health; find balance.",
        advice: "Seek common ground in small matters.",
    },
    Interpretation {
        number: 39,
        general: "Obstacles block the path; look within and seek help.",
        career: "Progress is halted; reassess and regroup.",
        relationship: "Tensions need honest talk.",
        health: "Take care and avoid overexertion.",
        advice: "Turn back, gather allies and try again.",
    },
    Interpretation {
        number: 40,
        general: "Release from difficulty; the tension is resolved.",
        career: "Problems dissolve; move on quickly.",
        relationship: "Forgiveness clears the air.",
        health: "Recovery and relief come.",
        advice: "Let go of the past and act promptly.",
    },
    Interpretation {
        number: 41,
        general: "Decrease now leads to future gain.",
        career: "Cut unnecessary costs and simplify.",
        relationship: "Give without expecting return.",
        health: "Reduce excess and simplify your habits.",
        advice: "Accept loss with sincerity; it makes room.",
    },
    Interpretation {
        number: 42,
        general: "A time of increase and blessing.",
        career: "Growth and gains; seize the moment.",
        relationship: "The relationship prospers through generosity.",
        health: "Vitality increases.",
        advice: "Use good fortune to help others.",
    },
    Interpretation {
        number: 43,
        general: "Decisive breakthrough; speak out firmly.",
        career: "Bring problems into the open and resolve them.",
        relationship: "Honest words clear what has festered.",
        health: "Remove what harms you.",
        advice: "Be resolute but not aggressive.",
    },
    Interpretation {
        number: 44,
        general: "An unexpected encounter brings temptation.",
        career: "Be wary of influences that look attractive.",
        relationship: "Not every meeting is meant to last.",
        health: "Guard against things that creep in unnoticed.",
        advice: "Stay alert and keep your boundaries.",
    },
    Interpretation {
        number: 45,
        general: "People gather around a shared purpose.",
        career: "Teamwork and assembly bring success.",
        relationship: "Community events bring people together.",
        health: "Group support helps healing.",
        advice: "Unite behind a worthy leader.",
    },
    Interpretation {
        number: 46,
        general: "Steady upward progress.",
        career: "Rise step by step through effort.",
        relationship: "The relationship develops gradually.",
        health: "Health improves steadily.",
        advice: "Keep climbing with patience.",
    },
    Interpretation {
        number: 47,
        general: "Exhaustion and constraint; keep faith within.",
        career: "Resources are short; stay steady.",
        relationship: "Hard times test the bond.",
        health: "Fatigue calls for rest.",
        advice: "Endure with dignity; words carry little weight now.",
    },
    Interpretation {
        number: 48,
        general: "A source that never runs dry.",
        career: "Draw on core skills and shared resources.",
        relationship: "Deep connection nourishes both.",
        health: "Drink clean water and care for basics.",
        advice: "Maintain and renew your sources.",
    },
    Interpretation {
        number: 49,
        general: "The time for transformation has come.",
        career: "Lead change when the moment is ripe.",
        relationship: "The relationship transforms.",
        health: "Change your habits for the better.",
        advice: "Act when the time is right and change truly.",
    },
    Interpretation {
        number: 50,
        general: "Refinement and renewal through culture.",
        career: "Build something lasting and valuable.",
        relationship: "The relationship matures and deepens.",
        health: "Good nutrition supports well-being.",
        advice: "Nurture talent and honour wisdom.",
    },
    Interpretation {
        number: 51,
        general: "Sudden shock awakens; fear turns to laughter.",
        career: "Unexpected events shake things up.",
        relationship: "A surprise changes the dynamic.",
        health: "Sudden issues need calm attention.",
        advice: "Stay composed when the thunder rolls.",
    },
    Interpretation {
        number: 52,
        general: "Stillness and inner calm.",
        career: "Pause and reflect before acting.",
        relationship: "Quiet presence is enough.",
        health: "Rest, meditate and relax.",
        advice: "Know when to stop.",
    },
    Interpretation {
        number: 53,
        general: "Gradual development, step by step.",
        career: "Slow and steady advancement.",
        relationship: "Love grows in its own time.",
        health: "Gradual improvement.",
        advice: "Be patient and let things unfold in order.",
    },
    Interpretation {
        number: 54,
        general: "An awkward position; act with care.",
        career: "You may be in a subordinate role; accept it gracefully.",
        relationship: "Unequal relationships need care.",
        health: "Avoid imbalance in your habits.",
        advice: "Know your position and act accordingly.",
    },
    Interpretation {
        number: 55,
        general: "A peak of abundance; enjoy it while it lasts.",
        career: "Success at its height.",
        relationship: "Joyful fullness together.",
        health: "Vitality peaks.",
        advice: "Shine fully but know the decline will follow.",
    },
    Interpretation {
        number: 56,
        general: "A traveller's path; caution in unfamiliar places.",
        career: "Temporary positions; stay humble.",
        relationship: "A passing connection.",
        health: "Take care while away from home.",
        advice: "Be modest and keep moving.",
    },
    Interpretation {
        number: 57,
        general: "Gentle persistence penetrates like the wind.",
        career: "Subtle influence achieves more than force.",
        relationship: "Gentleness wins hearts.",
        health: "Mild, gradual treatment works best.",
        advice: "Persist gently and repeat the message.",
    },
    Interpretation {
        number: 58,
        general: "Joy and openness shared with others.",
        career: "Enjoyable work and shared learning.",
        relationship: "Happiness and good conversation.",
        health: "Good mood supports health.",
        advice: "Share joy but avoid superficial pleasure.",
    },
    Interpretation {
        number: 59,
        general: "Dispersal and dissolution of rigidity.",
        career: "Break down barriers between people.",
        relationship: "Let go of misunderstandings.",
        health: "Release blocked energy.",
        advice: "Dissolve selfishness and reconnect.",
    },
    Interpretation {
        number: 60,
        general: "Limits and boundaries create order.",
        career: "Set reasonable limits and budgets.",
        relationship: "Healthy boundaries strengthen the bond.",
        health: "Moderation is key.",
        advice: "Accept limits without being too strict.",
    },
    Interpretation {
        number: 61,
        general: "Inner sincerity moves even the stubborn.",
        career: "Honesty builds trust.",
        relationship: "Deep mutual understanding.",
        health: "Inner peace supports health.",
        advice: "Be truthful from the heart.",
    },
    Interpretation {
        number: 62,
        general: "Small things get done; great things do not.",
        career: "Attend to details, not grand plans.",
        relationship: "Small gestures matter more now.",
        health: "Mind the small health issues.",
        advice: "Stay humble and handle what is close at hand.",
    },
    Interpretation {
        number: 63,
        general: "Completion reached, yet order needs guarding.",
        career: "Success achieved; maintain it carefully.",
        relationship: "A settled relationship needs continued care.",
        health: "Health is stable; do not neglect it.",
        advice: "Stay vigilant after success.",
    },
    Interpretation {
        number: 64,
        general: "Almost there; the final step needs care.",
        career: "Success is close; finish carefully.",
        relationship: "The relationship is still forming.",
        health: "Recovery is underway.",
        advice: "Proceed with caution until the very end.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_hexagram_in_order() {
        for (i, interp) in INTERPRETATIONS.iter().enumerate() {
            assert_eq!(usize::from(interp.number), i + 1);
        }
    }

    #[test]
    fn every_field_is_filled() {
        for interp in &INTERPRETATIONS {
            for text in [
                interp.general,
                interp.career,
                interp.relationship,
                interp.health,
                interp.advice,
            ] {
                assert!(!text.is_empty(), "No. {}", interp.number);
            }
        }
    }
}
