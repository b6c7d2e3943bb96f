//! The 64 hexagrams in King Wen order.

use crate::hexagram::Hexagram;
use crate::trigram::Trigram;

/// Every hexagram, indexed by `number - 1`.
pub static HEXAGRAMS: [Hexagram; 64] = [
    Hexagram {
        number: 1,
        name: "Qian",
        full_name: "The Creative",
        character: "乾",
        upper: Trigram::Qian,
        lower: Trigram::Qian,
        judgment: "Great and originating power; steadfast correctness brings success.",
        lines: [
            "The dragon lies hidden in the deep. Do not act.",
            "The dragon appears in the field. It pays to see the great man.",
            "All day the noble one is active and at night still watchful. Danger, but no blame.",
            "The dragon hovers over the depths, ready to leap. No blame.",
            "The dragon flies in the heavens. It pays to see the great man.",
            "The dragon that overreaches will have cause for regret.",
        ],
    },
    Hexagram {
        number: 2,
        name: "Kun",
        full_name: "The Receptive",
        character: "坤",
        upper: Trigram::Kun,
        lower: Trigram::Kun,
        judgment: "Great success through the steadiness of a mare. Leading goes astray; following finds the way.",
        lines: [
            "Frost underfoot: hard ice is on its way.",
            "Straight, square and great. Without striving, nothing fails to prosper.",
            "Keep your gifts concealed and stay constant. Serve without claiming the credit.",
            "A sack tied shut. Neither blame nor praise.",
            "A yellow lower garment. Supreme good fortune.",
            "Dragons battle in the wilds; their blood is dark and yellow.",
        ],
    },
    Hexagram {
        number: 3,
        name: "Zhun",
        full_name: "Difficulty at the Beginning",
        character: "屯",
        upper: Trigram::Kan,
        lower: Trigram::Zhen,
        judgment: "Great success through steadiness. Do not rush ahead; appoint helpers.",
        lines: [
            "Hesitation at the start. Stay steady and gather helpers.",
            "Obstacles mount; the horses balk. The suitor is no bandit, but the time is not yet ripe.",
            "Chasing deer without a guide leads only deeper into the forest. Better to stop.",
            "The horses balk, yet seeking union now brings good fortune.",
            "Blessings are hard to spread. Small steadiness helps; great insistence harms.",
            "The horses balk and tears of blood flow.",
        ],
    },
    Hexagram {
        number: 4,
        name: "Meng",
        full_name: "Youthful Folly",
        character: "蒙",
        upper: Trigram::Gen,
        lower: Trigram::Kan,
        judgment: "Success. The young seek the teacher, not the reverse. Ask once and be answered; ask again and again and the oracle stays silent.",
        lines: [
            "Discipline helps the untaught, but the shackles must come off in time.",
            "Bearing patiently with the foolish brings good fortune.",
            "Do not take one who loses herself at the sight of wealth.",
            "Folly that clings to ignorance meets humiliation.",
            "Childlike openness brings good fortune.",
            "Correct folly by guarding against harm, not by doing harm.",
        ],
    },
    Hexagram {
        number: 5,
        name: "Xu",
        full_name: "Waiting",
        character: "需",
        upper: Trigram::Kan,
        lower: Trigram::Qian,
        judgment: "Sincerity brings light and success. Steadiness is fortunate; the great water may be crossed.",
        lines: [
            "Waiting in the meadow. Hold to what endures.",
            "Waiting on the sand. Some gossip, but the end is good.",
            "Waiting in the mud invites the enemy.",
            "Waiting in blood. Climb out of the pit.",
            "Waiting with food and wine. Steadiness brings good fortune.",
            "Fallen into the pit, three uninvited guests arrive. Honour them and all ends well.",
        ],
    },
    Hexagram {
        number: 6,
        name: "Song",
        full_name: "Conflict",
        character: "訟",
        upper: Trigram::Qian,
        lower: Trigram::Kan,
        judgment: "Sincerity meets obstruction. Stopping halfway brings good fortune; pressing to the end brings misfortune.",
        lines: [
            "Do not prolong the quarrel. A little talk, then good fortune.",
            "Unable to win, one withdraws home and avoids disaster.",
            "Living on old merit and staying steady. Danger, then good fortune.",
            "Unable to win, one turns back and accepts one's lot.",
            "Bringing the dispute before a just judge. Supreme good fortune.",
            "An honour won through conflict is stripped away three times before the day is out.",
        ],
    },
    Hexagram {
        number: 7,
        name: "Shi",
        full_name: "The Army",
        character: "師",
        upper: Trigram::Kun,
        lower: Trigram::Kan,
        judgment: "An army needs steadiness and a seasoned leader. Good fortune, no blame.",
        lines: [
            "The army must march in good order, or misfortune follows.",
            "The leader stands in the midst of the army. Good fortune, and honours from the king.",
            "The wagons carry the dead. Misfortune.",
            "The army withdraws. No blame.",
            "There is game in the field; seize it. Let the elder lead, not the younger.",
            "The ruler rewards the victors; petty people must not be given power.",
        ],
    },
    Hexagram {
        number: 8,
        name: "Bi",
        full_name: "Holding Together",
        character: "比",
        upper: Trigram::Kan,
        lower: Trigram::Kun,
        judgment: "Union brings good fortune. Consult again whether you have constancy; latecomers meet misfortune.",
        lines: [
            "Hold to others in good faith and abundance follows.",
            "Union that comes from within. Steadiness is fortunate.",
            "Joining with the wrong people.",
            "Holding together openly with the worthy. Steadiness is fortunate.",
            "The king hunts on three sides only and lets the game in front escape. Good fortune.",
            "Union without a head. Misfortune.",
        ],
    },
    Hexagram {
        number: 9,
        name: "Xiao Chu",
        full_name: "The Taming Power of the Small",
        character: "小畜",
        upper: Trigram::Xun,
        lower: Trigram::Qian,
        judgment: "Success. Dense clouds gather but no rain falls yet.",
        lines: [
            "Returning to one's own path. What blame could there be?",
            "Drawn back along with others. Good fortune.",
            "The spokes break from the wheel; husband and wife glare at each other.",
            "Sincerity makes the danger pass. No blame.",
            "Sincerity binds neighbours together in shared wealth.",
            "The rain has come and rest follows; but pressing on now is dangerous.",
        ],
    },
    Hexagram {
        number: 10,
        name: "Lu",
        full_name: "Treading",
        character: "履",
        upper: Trigram::Qian,
        lower: Trigram::Dui,
        judgment: "Treading on the tiger's tail without being bitten. Success.",
        lines: [
            "Simple conduct. Going forward without blame.",
            "Walking a level road. The quiet recluse finds good fortune.",
            "The one-eyed think they see, the lame think they can walk; the tiger bites.",
            "Treading on the tiger's tail with great caution ends in good fortune.",
            "Resolute conduct, aware of the danger.",
            "Look back over your conduct; if it is complete, supreme good fortune.",
        ],
    },
    Hexagram {
        number: 11,
        name: "Tai",
        full_name: "Peace",
        character: "泰",
        upper: Trigram::Kun,
        lower: Trigram::Qian,
        judgment: "The small departs, the great arrives. Good fortune and success.",
        lines: [
            "Pull up one reed and its neighbours follow. Going forward is fortunate.",
            "Bear with the rough, cross the river boldly, forget no one far away.",
            "No level without a slope, no going without a return. Steady in hardship, no blame.",
            "Fluttering down without boasting of wealth, trusting the neighbours.",
            "The sovereign gives his daughter in marriage. Blessing and great good fortune.",
            "The wall crumbles back into the moat. Do not call out the army.",
        ],
    },
    Hexagram {
        number: 12,
        name: "Pi",
        full_name: "Standstill",
        character: "否",
        upper: Trigram::Qian,
        lower: Trigram::Kun,
        judgment: "Inferior people prevail; the great departs and the small arrives. Steadiness does not pay now.",
        lines: [
            "Pull up one reed and its neighbours follow. Steadiness brings success.",
            "Patient endurance: good for the small, while the great man holds firm through the standstill.",
            "Bearing shame in silence.",
            "Acting under a higher command. No blame.",
            "The standstill begins to give way. Stay mindful of failure and hold fast.",
            "The standstill ends. First obstruction, then joy.",
        ],
    },
    Hexagram {
        number: 13,
        name: "Tong Ren",
        full_name: "Fellowship with Men",
        character: "同人",
        upper: Trigram::Qian,
        lower: Trigram::Li,
        judgment: "Fellowship in the open brings success. Crossing the great water is favourable.",
        lines: [
            "Fellowship at the gate. No blame.",
            "Fellowship only within the clan. Regret.",
            "Weapons hidden in the thicket; for three years no move is made.",
            "Standing on the wall but not attacking. Good fortune.",
            "Companions first weep and lament, then laugh together after the struggle.",
            "Fellowship in the meadow at the city's edge. No regret.",
        ],
    },
    Hexagram {
        number: 14,
        name: "Da You",
        full_name: "Possession in Great Measure",
        character: "大有",
        upper: Trigram::Li,
        lower: Trigram::Qian,
        judgment: "Supreme success.",
        lines: [
            "Stay clear of what harms and remember hardship; then no blame.",
            "A large wagon for loading. Moving forward brings no blame.",
            "The prince offers his wealth to the ruler; a petty man could not.",
            "Keeping distance from excess. No blame.",
            "Trust given freely and dignity kept. Good fortune.",
            "Blessed by heaven. Good fortune, nothing unfavourable.",
        ],
    },
    Hexagram {
        number: 15,
        name: "Qian",
        full_name: "Modesty",
        character: "謙",
        upper: Trigram::Kun,
        lower: Trigram::Gen,
        judgment: "Modesty brings success; the noble one carries things through.",
        lines: [
            "Modest about one's modesty, one may cross the great water. Good fortune.",
            "Modesty that is recognised. Steadiness is fortunate.",
            "Modest in merit, the noble one finishes the work. Good fortune.",
            "Modesty put into action furthers everything.",
            "Not boasting before one's neighbours, one may act with force.",
            "Modesty that is heard. It is fitting to set things right at home.",
        ],
    },
    Hexagram {
        number: 16,
        name: "Yu",
        full_name: "Enthusiasm",
        character: "豫",
        upper: Trigram::Zhen,
        lower: Trigram::Kun,
        judgment: "Appoint helpers and set the host marching.",
        lines: [
            "Enthusiasm that boasts brings misfortune.",
            "Firm as a rock, not waiting out the day. Steadiness is fortunate.",
            "Enthusiasm that looks upward for favour brings regret; hesitation too.",
            "The source of enthusiasm. Great things are achieved; do not doubt.",
            "Chronically ill, yet not dying.",
            "Blind enthusiasm, but changing course even late brings no blame.",
        ],
    },
    Hexagram {
        number: 17,
        name: "Sui",
        full_name: "Following",
        character: "隨",
        upper: Trigram::Dui,
        lower: Trigram::Zhen,
        judgment: "Following brings supreme success. Steadiness furthers; no blame.",
        lines: [
            "The standard changes. Going out to meet others brings deeds.",
            "Clinging to the small, one loses the great.",
            "Clinging to the great, one lets the small go and finds what one seeks.",
            "Following that gathers a following. Sincerity makes the way clear.",
            "Sincere in following the good. Good fortune.",
            "Bound fast in loyalty; the king makes an offering on the western mountain.",
        ],
    },
    Hexagram {
        number: 18,
        name: "Gu",
        full_name: "Work on What Has Been Spoiled",
        character: "蠱",
        upper: Trigram::Gen,
        lower: Trigram::Xun,
        judgment: "Repairing decay brings supreme success. Consider three days before and three days after.",
        lines: [
            "Setting right what the father spoiled. Danger, then good fortune.",
            "Setting right what the mother spoiled. Do not be too rigid.",
            "Setting right the father's errors. Slight regret, no great blame.",
            "Tolerating the father's errors leads to humiliation.",
            "Setting right the father's errors earns praise.",
            "Serving no lord, one sets one's own higher aims.",
        ],
    },
    Hexagram {
        number: 19,
        name: "Lin",
        full_name: "Approach",
        character: "臨",
        upper: Trigram::Kun,
        lower: Trigram::Dui,
        judgment: "Approach brings supreme success. Steadiness furthers; in the eighth month comes misfortune.",
        lines: [
            "Approaching together. Steadiness is fortunate.",
            "Approaching together. Good fortune; everything furthers.",
            "Approaching with ease brings nothing good; grieving over it frees one from blame.",
            "Complete approach. No blame.",
            "Wise approach, fitting for a great ruler. Good fortune.",
            "Generous approach. Good fortune, no blame.",
        ],
    },
    Hexagram {
        number: 20,
        name: "Guan",
        full_name: "Contemplation",
        character: "觀",
        upper: Trigram::Xun,
        lower: Trigram::Kun,
        judgment: "The hands are washed but the offering not yet made; people look up in trust.",
        lines: [
            "A child's view: harmless for the small, shameful for the noble.",
            "Peering through the crack of a door.",
            "Contemplating one's own life decides advance or retreat.",
            "Contemplating the light of the kingdom; it is good to be the king's guest.",
            "Contemplating one's own life. The noble one is without blame.",
            "Contemplating the life of others. The noble one is without blame.",
        ],
    },
    Hexagram {
        number: 21,
        name: "Shi He",
        full_name: "Biting Through",
        character: "噬嗑",
        upper: Trigram::Li,
        lower: Trigram::Zhen,
        judgment: "Success. It is favourable to let justice take its course.",
        lines: [
            "Feet held in the stocks. No blame.",
            "Biting through soft meat up to the nose. No blame.",
            "Biting on old dried meat and meeting poison. Slight humiliation, no blame.",
            "Biting dried gristle and finding an arrowhead. Hardship and steadiness bring good fortune.",
            "Biting dried meat and finding gold. Steady in danger, no blame.",
            "The neck held in the cangue, the ears hidden. Misfortune.",
        ],
    },
    Hexagram {
        number: 22,
        name: "Bi",
        full_name: "Grace",
        character: "賁",
        upper: Trigram::Gen,
        lower: Trigram::Li,
        judgment: "Grace brings success in small matters.",
        lines: [
            "Adorning the feet, leaving the carriage to walk.",
            "Adorning the beard.",
            "Graceful and glistening. Lasting steadiness is fortunate.",
            "Grace or simplicity? A white horse arrives; the suitor is no bandit.",
            "Grace in hills and gardens; the gift of silk is meagre, yet the end is good.",
            "Simple white grace. No blame.",
        ],
    },
    Hexagram {
        number: 23,
        name: "Bo",
        full_name: "Splitting Apart",
        character: "剝",
        upper: Trigram::Gen,
        lower: Trigram::Kun,
        judgment: "It does not pay to go anywhere.",
        lines: [
            "The leg of the bed is split. Misfortune.",
            "The frame of the bed is split. Misfortune.",
            "Splitting away from them. No blame.",
            "The bed is split to the skin. Misfortune.",
            "A string of fish; favour through the court. Everything furthers.",
            "A large fruit remains uneaten. The noble one gains a carriage; the petty lose their house.",
        ],
    },
    Hexagram {
        number: 24,
        name: "Fu",
        full_name: "Return",
        character: "復",
        upper: Trigram::Kun,
        lower: Trigram::Zhen,
        judgment: "Return brings success. Friends come without blame; on the seventh day comes the turn.",
        lines: [
            "Returning from a short distance. No regret, great good fortune.",
            "Quiet return. Good fortune.",
            "Returning again and again. Danger, no blame.",
            "Walking among others, one returns alone.",
            "Return with a noble heart. No regret.",
            "Missing the way back. Misfortune for years to come.",
        ],
    },
    Hexagram {
        number: 25,
        name: "Wu Wang",
        full_name: "Innocence",
        character: "無妄",
        upper: Trigram::Qian,
        lower: Trigram::Zhen,
        judgment: "Supreme success through steadiness. Whoever is not upright meets misfortune.",
        lines: [
            "Innocent conduct brings good fortune.",
            "Ploughing without counting on the harvest; then it pays to go forward.",
            "Undeserved misfortune: the passer-by takes the tethered ox.",
            "Whoever can remain steady is without blame.",
            "An illness not of one's own making; use no medicine and it will pass.",
            "Acting now, even innocently, brings misfortune.",
        ],
    },
    Hexagram {
        number: 26,
        name: "Da Chu",
        full_name: "The Taming Power of the Great",
        character: "大畜",
        upper: Trigram::Gen,
        lower: Trigram::Qian,
        judgment: "Steadiness furthers. Not eating at home is fortunate; cross the great water.",
        lines: [
            "Danger ahead. It is better to stop.",
            "The axle is taken from the wagon.",
            "A good horse follows others. Mindful of hardship, steadiness furthers.",
            "A guard board on the young bull's horns. Great good fortune.",
            "The tusk of a gelded boar. Good fortune.",
            "The highway of heaven lies open. Success.",
        ],
    },
    Hexagram {
        number: 27,
        name: "Yi",
        full_name: "The Corners of the Mouth",
        character: "頤",
        upper: Trigram::Gen,
        lower: Trigram::Zhen,
        judgment: "Steadiness brings good fortune. Watch what nourishes others and what one seeks for oneself.",
        lines: [
            "Letting go of one's own treasure to gape at another's. Misfortune.",
            "Seeking nourishment from the wrong height. Going on brings misfortune.",
            "Turning from true nourishment. Misfortune for ten years.",
            "Seeking nourishment from above, watchful as a tiger. Good fortune.",
            "Departing from custom; staying steady is fortunate, but do not cross great water.",
            "The source of nourishment. Aware of danger, good fortune; cross the great water.",
        ],
    },
    Hexagram {
        number: 28,
        name: "Da Guo",
        full_name: "Preponderance of the Great",
        character: "大過",
        upper: Trigram::Dui,
        lower: Trigram::Xun,
        judgment: "The ridgepole sags. It pays to have somewhere to go. Success.",
        lines: [
            "Spreading white rushes beneath. No blame.",
            "A dry willow sprouts; an old man takes a young wife. Everything furthers.",
            "The ridgepole sags to breaking. Misfortune.",
            "The ridgepole is braced. Good fortune, unless ulterior motives creep in.",
            "A dry willow flowers; an old woman takes a young husband. No blame, no praise.",
            "Wading too deep, the water closes overhead. Misfortune, but no blame.",
        ],
    },
    Hexagram {
        number: 29,
        name: "Kan",
        full_name: "The Abysmal",
        character: "坎",
        upper: Trigram::Kan,
        lower: Trigram::Kan,
        judgment: "Danger doubled. Sincerity holds the heart steady and action brings honour.",
        lines: [
            "Falling into a pit within the abyss. Misfortune.",
            "The abyss is dangerous; aim only for small gains.",
            "Abyss upon abyss in every direction. Stop and wait.",
            "A jug of wine and a bowl of rice passed through the window. No blame.",
            "The abyss is filled only to the brim. No blame.",
            "Bound with ropes among thorns; three years without finding the way. Misfortune.",
        ],
    },
    Hexagram {
        number: 30,
        name: "Li",
        full_name: "The Clinging",
        character: "離",
        upper: Trigram::Li,
        lower: Trigram::Li,
        judgment: "Steadiness furthers and brings success. Caring for the cow brings good fortune.",
        lines: [
            "Footsteps cross in confusion; earnest attention brings no blame.",
            "Yellow light. Supreme good fortune.",
            "In the glow of sunset one either sings or laments old age. Misfortune.",
            "It comes suddenly, flares, dies and is cast away.",
            "Tears in floods and sighs of grief. Good fortune.",
            "The king sends him out to set things right; only the ringleaders are punished. No blame.",
        ],
    },
    Hexagram {
        number: 31,
        name: "Xian",
        full_name: "Influence",
        character: "咸",
        upper: Trigram::Dui,
        lower: Trigram::Gen,
        judgment: "Influence brings success. Steadiness furthers; taking a wife is fortunate.",
        lines: [
            "Influence shows in the big toe.",
            "Influence in the calves. Misfortune; staying put is fortunate.",
            "Influence in the thighs; clinging to what one follows leads to humiliation.",
            "Steadiness is fortunate and regret vanishes; restless thoughts draw only friends.",
            "Influence in the back of the neck. No regret.",
            "Influence in the jaws, cheeks and tongue: mere talk.",
        ],
    },
    Hexagram {
        number: 32,
        name: "Heng",
        full_name: "Duration",
        character: "恆",
        upper: Trigram::Zhen,
        lower: Trigram::Xun,
        judgment: "Duration brings success without blame. Steadiness furthers; it pays to have somewhere to go.",
        lines: [
            "Seeking permanence too quickly brings misfortune.",
            "Regret vanishes.",
            "Inconstant character meets disgrace.",
            "No game in the field.",
            "Constancy of character: fortunate for the follower, unfortunate for the leader.",
            "Restlessness made permanent brings misfortune.",
        ],
    },
    Hexagram {
        number: 33,
        name: "Dun",
        full_name: "Retreat",
        character: "遯",
        upper: Trigram::Qian,
        lower: Trigram::Gen,
        judgment: "Retreat brings success. In small things steadiness furthers.",
        lines: [
            "Retreating at the tail is dangerous. Undertake nothing.",
            "Held fast with yellow oxhide; nothing can tear it loose.",
            "A retreat held back is tiring and dangerous; keep servants close.",
            "Willing retreat: fortunate for the noble, ruin for the petty.",
            "Friendly retreat. Steadiness is fortunate.",
            "Cheerful retreat. Everything furthers.",
        ],
    },
    Hexagram {
        number: 34,
        name: "Da Zhuang",
        full_name: "The Power of the Great",
        character: "大壯",
        upper: Trigram::Zhen,
        lower: Trigram::Qian,
        judgment: "Steadiness furthers.",
        lines: [
            "Power in the toes. Pressing on brings misfortune.",
            "Steadiness brings good fortune.",
            "The petty use force; the ram butts the hedge and tangles its horns.",
            "The hedge opens and the horns are free. Regret vanishes.",
            "Losing the ram with ease. No regret.",
            "The ram is stuck in the hedge, unable to go back or forward; recognising the difficulty brings good fortune.",
        ],
    },
    Hexagram {
        number: 35,
        name: "Jin",
        full_name: "Progress",
        character: "晉",
        upper: Trigram::Li,
        lower: Trigram::Kun,
        judgment: "The prince is honoured with many horses and received three times in a day.",
        lines: [
            "Advancing yet held back; stay steady and calm when not trusted.",
            "Advancing in sorrow; blessing comes from the grandmother.",
            "All are in agreement. Regret vanishes.",
            "Advancing like a hamster. Steadiness is dangerous.",
            "Regret vanishes; do not weigh gain and loss. Going forward is fortunate.",
            "Advancing with the horns only to discipline one's own city.",
        ],
    },
    Hexagram {
        number: 36,
        name: "Ming Yi",
        full_name: "Darkening of the Light",
        character: "明夷",
        upper: Trigram::Kun,
        lower: Trigram::Li,
        judgment: "In adversity it pays to remain steady.",
        lines: [
            "The light darkens in flight; the wings droop, three days without food.",
            "Wounded in the left thigh, one rescues with the strength of a horse. Good fortune.",
            "Hunting in the south, the great leader is caught. Do not expect steadiness too soon.",
            "Entering the left side of the belly, one grasps the heart of the darkness.",
            "Hiding one's light like Prince Ji. Steadiness furthers.",
            "Not light but darkness: first rising to heaven, then plunging into the earth.",
        ],
    },
    Hexagram {
        number: 37,
        name: "Jia Ren",
        full_name: "The Family",
        character: "家人",
        upper: Trigram::Xun,
        lower: Trigram::Li,
        judgment: "The steadiness of the woman furthers.",
        lines: [
            "Firm order within the household. Regret vanishes.",
            "Tending the food within, not following whims. Steadiness is fortunate.",
            "Too much severity brings regret; too much laughter brings humiliation.",
            "She is the treasure of the house. Great good fortune.",
            "The king draws near his family. Do not fear. Good fortune.",
            "Sincere and dignified, in the end good fortune.",
        ],
    },
    Hexagram {
        number: 38,
        name: "Kui",
        full_name: "Opposition",
        character: "睽",
        upper: Trigram::Li,
        lower: Trigram::Dui,
        judgment: "In small matters, good fortune.",
        lines: [
            "The lost horse will return by itself; meeting the wicked, avoid mistakes.",
            "Meeting one's lord in a narrow lane. No blame.",
            "The wagon dragged back and the oxen halted; a poor start but a good end.",
            "Isolated by opposition, one meets a kindred spirit. Danger, no blame.",
            "Regret vanishes; the companion bites through the wrapping. Going is no mistake.",
            "Seeing a companion as a mud-covered pig, one draws the bow, then lowers it; rain brings good fortune.",
        ],
    },
    Hexagram {
        number: 39,
        name: "Jian",
        full_name: "Obstruction",
        character: "蹇",
        upper: Trigram::Kan,
        lower: Trigram::Gen,
        judgment: "The southwest furthers, the northeast does not. See the great man; steadiness is fortunate.",
        lines: [
            "Going meets obstruction; coming back earns praise.",
            "The king's servant meets obstacle on obstacle through no fault of his own.",
            "Going meets obstruction, so he turns back.",
            "Going meets obstruction; coming back brings union.",
            "In the greatest obstruction, friends arrive.",
            "Going meets obstruction; coming back brings great good fortune.",
        ],
    },
    Hexagram {
        number: 40,
        name: "Xie",
        full_name: "Deliverance",
        character: "解",
        upper: Trigram::Zhen,
        lower: Trigram::Kan,
        judgment: "The southwest furthers. Return if nothing remains to do; act early if something does.",
        lines: [
            "No blame.",
            "Three foxes caught in the field and a yellow arrow gained. Steadiness is fortunate.",
            "Carrying a load while riding in a carriage invites robbers.",
            "Free yourself from the big toe; then the true friend arrives.",
            "The noble one frees himself, and the petty see he is in earnest.",
            "The prince shoots the hawk on the high wall. Everything furthers.",
        ],
    },
    Hexagram {
        number: 41,
        name: "Sun",
        full_name: "Decrease",
        character: "損",
        upper: Trigram::Gen,
        lower: Trigram::Dui,
        judgment: "Decrease joined with sincerity brings supreme good fortune. Two small bowls suffice for the offering.",
        lines: [
            "Going quickly once the work is done; weigh how much to take from others.",
            "Steadiness furthers; one increases others without decreasing oneself.",
            "Three travelling together lose one; one travelling alone finds a companion.",
            "Lessening one's faults makes the other hasten with joy.",
            "Enriched beyond the power of any oracle to oppose. Supreme good fortune.",
            "Increase without taking from others. Steadiness is fortunate.",
        ],
    },
    Hexagram {
        number: 42,
        name: "Yi",
        full_name: "Increase",
        character: "益",
        upper: Trigram::Xun,
        lower: Trigram::Zhen,
        judgment: "It pays to undertake something and to cross the great water.",
        lines: [
            "It pays to carry out great works. Supreme good fortune.",
            "Enriched beyond opposition. Lasting steadiness is fortunate.",
            "Enriched through misfortune; walk the middle path in sincerity.",
            "Walking the middle path and advising the prince, one is followed.",
            "A truly kind heart needs no questions. Supreme good fortune.",
            "Giving nothing to anyone, one is struck instead. Misfortune.",
        ],
    },
    Hexagram {
        number: 43,
        name: "Guai",
        full_name: "Breakthrough",
        character: "夬",
        upper: Trigram::Dui,
        lower: Trigram::Qian,
        judgment: "Announce the matter truthfully at the king's court. There is danger; do not take up arms.",
        lines: [
            "Striding forward on the toes; not equal to the task, one errs.",
            "A cry of alarm in the night; fear nothing.",
            "Showing force in the face brings misfortune; the resolute walk alone in the rain.",
            "No skin on the thighs, walking is hard; let yourself be led and regret vanishes.",
            "Clearing weeds takes firm resolve; walking the middle brings no blame.",
            "No cry of warning. In the end misfortune.",
        ],
    },
    Hexagram {
        number: 44,
        name: "Gou",
        full_name: "Coming to Meet",
        character: "姤",
        upper: Trigram::Qian,
        lower: Trigram::Xun,
        judgment: "The maiden is powerful. Do not marry such a maiden.",
        lines: [
            "Checked with a bronze brake. Steadiness is fortunate.",
            "A fish in the tank. No blame, but not for guests.",
            "No skin on the thighs, walking is hard; mindful of danger, no great mistake.",
            "No fish in the tank. Misfortune.",
            "A melon covered with willow leaves; the hidden falls from heaven.",
            "Meeting with the horns. Regret, but no blame.",
        ],
    },
    Hexagram {
        number: 45,
        name: "Cui",
        full_name: "Gathering Together",
        character: "萃",
        upper: Trigram::Dui,
        lower: Trigram::Kun,
        judgment: "Success. The king approaches the temple; a great offering brings good fortune.",
        lines: [
            "Sincere but not to the end, one wavers; a laugh after the cry. Going is no blame.",
            "Letting oneself be drawn brings good fortune; even a small offering is enough.",
            "Gathering amid sighs. Going brings no blame, only slight regret.",
            "Great good fortune. No blame.",
            "Gathering with position but not yet trust; lasting steadiness removes regret.",
            "Sighing and tears. No blame.",
        ],
    },
    Hexagram {
        number: 46,
        name: "Sheng",
        full_name: "Pushing Upward",
        character: "升",
        upper: Trigram::Kun,
        lower: Trigram::Xun,
        judgment: "Supreme success. See the great man without fear; setting out south is fortunate.",
        lines: [
            "Welcomed as one rises. Great good fortune.",
            "Sincerity makes even a small offering enough. No blame.",
            "Climbing into an empty city.",
            "The king makes an offering on Mount Qi. Good fortune, no blame.",
            "Steadiness is fortunate; rising step by step.",
            "Rising in the dark; only unceasing steadiness helps.",
        ],
    },
    Hexagram {
        number: 47,
        name: "Kun",
        full_name: "Oppression",
        character: "困",
        upper: Trigram::Dui,
        lower: Trigram::Kan,
        judgment: "Success for the steadfast great man; words are not believed.",
        lines: [
            "Sitting under a bare tree, one strays into a gloomy valley for three years.",
            "Oppressed amid food and wine; the one in red knee bands arrives. Make an offering.",
            "Leaning on thorns and pressed by stone, one comes home and finds no wife. Misfortune.",
            "Arriving slowly, hindered in a golden carriage. Regret, but an end is reached.",
            "Nose and feet cut off, oppressed by the one in purple; joy comes slowly.",
            "Tangled in creeping vines; regret moves one to act, and that brings good fortune.",
        ],
    },
    Hexagram {
        number: 48,
        name: "Jing",
        full_name: "The Well",
        character: "井",
        upper: Trigram::Kan,
        lower: Trigram::Xun,
        judgment: "The town may move but the well does not. If the rope is short or the jug breaks, misfortune.",
        lines: [
            "Nobody drinks the mud of the well; no creature comes to an old well.",
            "Shooting fish in the well hole; the jug is cracked and leaks.",
            "The well is cleaned but nobody drinks; it grieves the heart.",
            "The well is being lined. No blame.",
            "A clear cold spring one can drink from.",
            "Drawing from the well uncovered. Sincerity brings supreme good fortune.",
        ],
    },
    Hexagram {
        number: 49,
        name: "Ge",
        full_name: "Revolution",
        character: "革",
        upper: Trigram::Dui,
        lower: Trigram::Li,
        judgment: "Believed only when the day has come. Supreme success through steadiness; regret vanishes.",
        lines: [
            "Bound in the hide of a yellow cow.",
            "When the day comes, change may begin. Going forward is fortunate.",
            "Rushing brings misfortune; when talk of change has gone around three times, act.",
            "Regret vanishes and people believe; changing the order brings good fortune.",
            "The great man changes like a tiger; he is trusted even before consulting the oracle.",
            "The noble one changes like a leopard; the petty change only their faces. Stay steady.",
        ],
    },
    Hexagram {
        number: 50,
        name: "Ding",
        full_name: "The Cauldron",
        character: "鼎",
        upper: Trigram::Li,
        lower: Trigram::Xun,
        judgment: "Supreme good fortune and success.",
        lines: [
            "The cauldron is upended to empty the stale. No blame.",
            "There is food in the cauldron; the envious cannot reach me. Good fortune.",
            "The handles are altered and the fat pheasant goes uneaten; rain brings good fortune at last.",
            "The legs break and the prince's meal spills. Misfortune.",
            "Yellow handles and golden rings. Steadiness furthers.",
            "Rings of jade. Great good fortune; everything furthers.",
        ],
    },
    Hexagram {
        number: 51,
        name: "Zhen",
        full_name: "The Arousing",
        character: "震",
        upper: Trigram::Zhen,
        lower: Trigram::Zhen,
        judgment: "Shock brings success. Fear first, then laughter; the ladle of wine is not dropped.",
        lines: [
            "Shock, then laughter. Good fortune.",
            "Shock brings danger and loss; do not chase what was lost, it returns in seven days.",
            "Shock leaves one distraught; acting on it avoids harm.",
            "Shock gets stuck in the mud.",
            "Shock comes and goes. Danger, but nothing is lost; there is work to do.",
            "Shock brings ruin and wild looks; if it strikes the neighbour first, no blame.",
        ],
    },
    Hexagram {
        number: 52,
        name: "Gen",
        full_name: "Keeping Still",
        character: "艮",
        upper: Trigram::Gen,
        lower: Trigram::Gen,
        judgment: "Keeping the back still, no longer feeling the self; walking in the courtyard without seeing anyone. No blame.",
        lines: [
            "Keeping the toes still. No blame; lasting steadiness furthers.",
            "Keeping the calves still; unable to help the one followed, the heart is uneasy.",
            "Keeping the hips still; the back stiffens and the heart is suffocated.",
            "Keeping the trunk still. No blame.",
            "Keeping the jaws still; words come in order. Regret vanishes.",
            "Noble-hearted stillness. Good fortune.",
        ],
    },
    Hexagram {
        number: 53,
        name: "Jian",
        full_name: "Development",
        character: "漸",
        upper: Trigram::Xun,
        lower: Trigram::Gen,
        judgment: "The maiden is given in marriage. Good fortune; steadiness furthers.",
        lines: [
            "The wild goose nears the shore; the young son is in danger and there is talk.",
            "The goose reaches the cliff; eating and drinking in peace.",
            "The goose reaches the plateau; the man goes out and does not return. Guard against robbers.",
            "The goose reaches a tree and may find a flat branch. No blame.",
            "The goose reaches the summit; after three barren years nothing prevails against her.",
            "The goose reaches the heights; its feathers grace the sacred dance.",
        ],
    },
    Hexagram {
        number: 54,
        name: "Gui Mei",
        full_name: "The Marrying Maiden",
        character: "歸妹",
        upper: Trigram::Zhen,
        lower: Trigram::Dui,
        judgment: "Undertakings bring misfortune. Nothing furthers.",
        lines: [
            "The maiden marries as a secondary wife; the lame can still walk.",
            "The one-eyed can still see; the steadiness of a solitary person furthers.",
            "The maiden marries as a servant, then as a secondary wife.",
            "The maiden delays the marriage; the late marriage comes in due time.",
            "The bride's sleeves are plainer than the bridesmaid's; the moon nearly full.",
            "A basket without fruit, a sacrifice without blood. Nothing furthers.",
        ],
    },
    Hexagram {
        number: 55,
        name: "Feng",
        full_name: "Abundance",
        character: "豐",
        upper: Trigram::Zhen,
        lower: Trigram::Li,
        judgment: "Abundance brings success. Be like the sun at midday, without sorrow.",
        lines: [
            "Meeting a ruler of one's kind; ten days together bring no blame.",
            "The curtain is so thick the stars show at noon; sincerity brings good fortune.",
            "The undergrowth is so thick the small stars show at noon; the right arm breaks.",
            "Stars at noon, yet one meets a kindred ruler. Good fortune.",
            "Bright talents gather, bringing blessing and renown.",
            "A grand house screens off the family; three years without seeing anyone.",
        ],
    },
    Hexagram {
        number: 56,
        name: "Lu",
        full_name: "The Wanderer",
        character: "旅",
        upper: Trigram::Li,
        lower: Trigram::Gen,
        judgment: "Success in small things. Steadiness brings good fortune to the wanderer.",
        lines: [
            "A wanderer busy with trifles draws misfortune.",
            "Reaching an inn with goods in hand, the wanderer wins a loyal servant.",
            "The inn burns and the servant is lost. Danger.",
            "Finding shelter, goods and an axe, yet the heart is not glad.",
            "Shooting a pheasant with one arrow, praise and office follow.",
            "The bird's nest burns; laughter turns to weeping, the cow is lost. Misfortune.",
        ],
    },
    Hexagram {
        number: 57,
        name: "Xun",
        full_name: "The Gentle",
        character: "巽",
        upper: Trigram::Xun,
        lower: Trigram::Xun,
        judgment: "Success through small things. It pays to have somewhere to go and to see the great man.",
        lines: [
            "Advancing and retreating; the steadiness of a warrior helps.",
            "Searching beneath the bed with many diviners. Good fortune, no blame.",
            "Repeated penetration brings humiliation.",
            "Regret vanishes; three kinds of game are caught.",
            "No beginning but a good end; three days before and after the change. Good fortune.",
            "Under the bed, the axe and goods are lost. Steadiness brings misfortune.",
        ],
    },
    Hexagram {
        number: 58,
        name: "Dui",
        full_name: "The Joyous",
        character: "兌",
        upper: Trigram::Dui,
        lower: Trigram::Dui,
        judgment: "Joy brings success. Steadiness furthers.",
        lines: [
            "Contented joy. Good fortune.",
            "Sincere joy. Good fortune; regret vanishes.",
            "Joy that is sought out. Misfortune.",
            "Weighing joys brings no peace; turning from the harmful brings gladness.",
            "Trusting what erodes is dangerous.",
            "Joy that seduces.",
        ],
    },
    Hexagram {
        number: 59,
        name: "Huan",
        full_name: "Dispersion",
        character: "渙",
        upper: Trigram::Xun,
        lower: Trigram::Kan,
        judgment: "Success. The king approaches the temple; cross the great water. Steadiness furthers.",
        lines: [
            "Help comes with the strength of a horse. Good fortune.",
            "In the scattering, one hurries to one's support. Regret vanishes.",
            "Dissolving one's self. No regret.",
            "Dispersing the faction brings great good fortune; scattering leads to gathering.",
            "Great proclamations dissolve like sweat; the king's dwelling stands without blame.",
            "Dispersing what brings bloodshed; going far away is without blame.",
        ],
    },
    Hexagram {
        number: 60,
        name: "Jie",
        full_name: "Limitation",
        character: "節",
        upper: Trigram::Kan,
        lower: Trigram::Dui,
        judgment: "Limitation brings success, but bitter limits cannot be kept for long.",
        lines: [
            "Not leaving the courtyard. No blame.",
            "Not going out the gate. Misfortune.",
            "Whoever knows no limit will lament. No blame.",
            "Contented limitation. Success.",
            "Sweet limitation brings good fortune; going forward earns esteem.",
            "Bitter limitation; steadiness brings misfortune, though regret vanishes.",
        ],
    },
    Hexagram {
        number: 61,
        name: "Zhong Fu",
        full_name: "Inner Truth",
        character: "中孚",
        upper: Trigram::Xun,
        lower: Trigram::Dui,
        judgment: "Even pigs and fishes are reached. Good fortune; cross the great water.",
        lines: [
            "Being prepared brings good fortune; hidden designs bring unrest.",
            "A crane calls in the shade and its young answer; a good cup to share.",
            "Finding a partner: now drumming, now stopping, now weeping, now singing.",
            "The moon nearly full; the horse leaves its mate. No blame.",
            "Sincerity that binds together. No blame.",
            "The rooster's cry reaches heaven. Steadiness brings misfortune.",
        ],
    },
    Hexagram {
        number: 62,
        name: "Xiao Guo",
        full_name: "Preponderance of the Small",
        character: "小過",
        upper: Trigram::Zhen,
        lower: Trigram::Gen,
        judgment: "Small things may be done, great things not. The bird should not fly high but stay low. Great good fortune.",
        lines: [
            "The bird that flies meets misfortune.",
            "Passing the ancestor to meet the ancestress; not reaching the prince but the official. No blame.",
            "Without great caution, one is struck from behind. Misfortune.",
            "Meeting without passing by; going on is dangerous, be on guard.",
            "Dense clouds, no rain; the prince shoots and takes what is in the cave.",
            "Passing by without meeting; the bird flies off. Misfortune.",
        ],
    },
    Hexagram {
        number: 63,
        name: "Ji Ji",
        full_name: "After Completion",
        character: "既濟",
        upper: Trigram::Kan,
        lower: Trigram::Li,
        judgment: "Success in small matters. Good fortune at the start, disorder at the end.",
        lines: [
            "Braking the wheels, wetting the tail. No blame.",
            "The curtain of the carriage is lost; do not chase it, in seven days it returns.",
            "The ancestor subdues the Devil Country in three years; do not use petty people.",
            "Fine clothes turn to rags; stay careful all day.",
            "The great ox sacrifice in the east counts less than the small offering in the west.",
            "The head goes under water. Danger.",
        ],
    },
    Hexagram {
        number: 64,
        name: "Wei Ji",
        full_name: "Before Completion",
        character: "未濟",
        upper: Trigram::Li,
        lower: Trigram::Kan,
        judgment: "Success; but the little fox that wets its tail near the end finds nothing favourable.",
        lines: [
            "Wetting the tail. Humiliation.",
            "Braking the wheels. Steadiness is fortunate.",
            "Before completion, attacking brings misfortune; yet crossing the great water helps.",
            "Steadiness is fortunate and regret vanishes; after three years rewards come.",
            "Steadiness is fortunate without regret; the light of the noble one is true.",
            "Drinking wine in trust, no blame; but whoever soaks the head loses it.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::Pattern;

    #[test]
    fn numbers_are_in_king_wen_order() {
        for (i, h) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(usize::from(h.number), i + 1, "{}", h.name);
        }
    }

    #[test]
    fn patterns_cover_every_combination_once() {
        let mut seen = [false; 64];
        for h in &HEXAGRAMS {
            let bits = usize::from(h.pattern().bits());
            assert!(!seen[bits], "pattern {} repeated by {}", h.pattern(), h.label());
            seen[bits] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn pure_hexagrams_double_their_trigram() {
        for h in HEXAGRAMS.iter().filter(|h| h.upper == h.lower) {
            assert_eq!(h.name, h.upper.name(), "No. {}", h.number);
        }
        assert_eq!(HEXAGRAMS.iter().filter(|h| h.upper == h.lower).count(), 8);
    }

    #[test]
    fn known_patterns() {
        assert_eq!(HEXAGRAMS[0].pattern(), Pattern::ALL_YANG);
        assert_eq!(HEXAGRAMS[1].pattern(), Pattern::ALL_YIN);
        assert_eq!(HEXAGRAMS[59].name, "Jie");
        assert_eq!(HEXAGRAMS[59].pattern().bits(), 0b010_011);
        assert_eq!(HEXAGRAMS[46].full_name, "Oppression");
        assert_eq!(HEXAGRAMS[46].pattern().bits(), 0b011_010);
        // Tai: earth above heaven.
        assert_eq!(HEXAGRAMS[10].pattern().bits(), 0b000_111);
    }

    #[test]
    fn texts_are_present() {
        for h in &HEXAGRAMS {
            assert!(!h.judgment.is_empty());
            assert!(!h.character.is_empty());
            assert!(h.lines.iter().all(|l| !l.is_empty()), "No. {}", h.number);
        }
    }
}
