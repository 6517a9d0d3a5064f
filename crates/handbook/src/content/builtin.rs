//! The BeeSim staff handbook content

use super::{Command, ContentSection, Icon, PunishmentRow, SubSection};

/// Build the built-in section list, in display order.
pub(super) fn sections() -> Vec<ContentSection> {
    vec![
        welcome(),
        guidelines(),
        roles(),
        commands(),
        punishments(),
        discord(),
    ]
}

fn welcome() -> ContentSection {
    ContentSection::new("welcome", "Welcome", Icon::HeartHandshake)
        .with_description("Introduction to the BeeSim Staff Team")
        .with_content(
            "As a staff member, you're the face of our server. This comprehensive guide will \
             help you understand your responsibilities, commands at your disposal, and how to \
             excel in your role to provide the best experience for our players.",
        )
}

fn guidelines() -> ContentSection {
    ContentSection::new("guidelines", "Guidelines", Icon::BookOpen)
        .with_description("Expectations for professionalism and conduct")
        .with_sub_section(
            SubSection::new("Professionalism")
                .with_content(
                    "As a staff member, your conduct sets the standard for the entire community. \
                     Professionalism isn't just about following rules; it's about maintaining \
                     composure under pressure, treating every player with respect regardless of \
                     their behavior, and representing the server's values in every interaction. \
                     You are the face of BeeSim, and your ability to remain calm and objective in \
                     stressful situations inspires confidence and trust. Never let personal \
                     emotions dictate your administrative actions.",
                )
                .with_list([
                    "Be patient with new players",
                    "Remain calm in stressful situations",
                    "Set a positive example in chat",
                ]),
        )
        .with_sub_section(
            SubSection::new("Communication")
                .with_content(
                    "Effective moderation relies heavily on clear, concise, and empathetic \
                     communication. When addressing rule violations, explain the \"why\" behind \
                     the rule, not just the punishment. Use proper grammar to maintain authority \
                     and clarity. Coordinate seamlessly with your fellow staff members in private \
                     channels to ensure a unified front. Your words have weight: use them to \
                     de-escalate conflicts and guide players towards positive behavior rather \
                     than simply punishing them.",
                )
                .with_list([
                    "Explain rules and punishments clearly",
                    "Use proper grammar and spelling",
                    "Be concise but thorough in explanations",
                    "Coordinate with other staff members",
                ]),
        )
        .with_sub_section(
            SubSection::new("Fairness")
                .with_content(
                    "Trust is the foundation of our community, and it is built on consistent and \
                     fair application of the rules. Every player, regardless of their rank, \
                     playtime, or relationship with staff, must be treated equally. Adhere \
                     strictly to the punishment guidelines to ensure predictability, but use your \
                     judgment to understand context. Fairness also means admitting when you are \
                     wrong; correcting a mistake shows strength of character and reinforces our \
                     commitment to justice.",
                )
                .with_list([
                    "Apply rules consistently to all players",
                    "Don't show favoritism",
                    "Follow punishment guidelines",
                    "Be willing to admit and correct mistakes",
                ]),
        )
}

fn roles() -> ContentSection {
    ContentSection::new("roles", "Roles", Icon::Users)
        .with_description("Responsibilities per staff rank")
        .with_sub_section(
            SubSection::new("Helper")
                .with_content(
                    "As a helper, your primary focus is on player support and chat moderation. \
                     You're the first line of defense against rule-breakers and the first point \
                     of contact for new players.",
                )
                .with_list([
                    "Moderate chat and enforce rules",
                    "Help new players understand the server",
                    "Answer questions and provide guidance",
                    "Issue warnings and mutes for minor offenses",
                    "Escalate serious issues to higher staff",
                ]),
        )
        .with_sub_section(
            SubSection::new("Junior Moderator")
                .with_content(
                    "As a Jr. Mod, you take on more responsibility in player moderation while \
                     continuing to assist players. You now have tools to handle more serious \
                     offenses.",
                )
                .with_list([
                    "Continue chat moderation duties",
                    "Handle intermediate level offenses",
                    "Use basic moderation tools to catch hackers",
                    "Assist with simple in-game issues",
                    "Help train new Helpers",
                ]),
        )
        .with_sub_section(
            SubSection::new("Moderator")
                .with_content(
                    "Moderators are experienced staff members who handle the full range of \
                     moderation duties and player support. You're trusted with significant \
                     responsibilities.",
                )
                .with_list([
                    "Investigate and punish serious offenses",
                    "Handle player reports and tickets",
                    "Resolve complex player issues",
                    "Assist with server events",
                    "Mentor junior staff members",
                    "Help maintain server stability",
                ]),
        )
}

fn commands() -> ContentSection {
    ContentSection::new("commands", "Commands", Icon::Terminal)
        .with_description("Reference for staff commands")
        .with_sub_section(SubSection::new("Helper Commands").with_commands(vec![
            Command::new(
                "/libertybans history <Player>",
                "Checks the player's punishment history.",
                "Before issuing punishments, check if the player has prior offenses",
            ),
            Command::new(
                "/libertybans mute <Player> <Time> <Reason>",
                "Temporarily mutes a player from chat.",
                "Use for chat offenses (spam, swearing, etc.)",
            ),
            Command::new(
                "/cc",
                "Clears the global chat.",
                "Use when chat is being flooded or contains inappropriate content",
            ),
            Command::new(
                "/sc",
                "Staff chat - only visible to staff.",
                "For staff communication and coordination",
            ),
            Command::new(
                "/libertybans warn <Player> <Reason>",
                "Issues a formal warning to a player.",
                "For minor first-time offenses",
            ),
            Command::new(
                "/fly",
                "Toggles flight mode.",
                "Use to catch hackers or assist players",
            ),
        ]))
        .with_sub_section(SubSection::new("Jr. Mod Commands").with_commands(vec![
            Command::new(
                "/libertybans ban <Player> <Time> <Reason>",
                "Temporarily bans a player from the server.",
                "For serious or repeated offenses",
            ),
            Command::new(
                "/gm spectator",
                "Switches to spectator mode.",
                "For observing potential hackers",
            ),
            Command::new(
                "/vanish",
                "Toggles invisibility to normal players.",
                "For discreet moderation",
            ),
            Command::new(
                "/teleport <Player>",
                "Teleports to a player.",
                "To quickly reach players needing help",
            ),
            Command::new(
                "/invsee <Player>",
                "Views a player's inventory.",
                "To check for illegal items or verify reports",
            ),
        ]))
        .with_sub_section(SubSection::new("Moderator Commands").with_commands(vec![
            Command::new(
                "/libertybans ban <Player> <Reason>",
                "Permanently bans a player.",
                "For severe offenses or repeat offenders",
            ),
            Command::new(
                "/adminbees <Player> <Action>",
                "Modifies a player's bees.",
                "For correcting issues or special cases",
            ),
            Command::new(
                "/libertybans alts <Player>",
                "Shows a player's alternate accounts.",
                "Set time to 999d for permanent bans",
            ),
            Command::new(
                "/libertybans mutelist",
                "Shows currently muted players.",
                "To review active mutes",
            ),
            Command::new(
                "/libertybans banlist",
                "Shows currently banned players.",
                "To review active bans",
            ),
            Command::new(
                "/libertybans banip <Player> <Time> <Reason>",
                "Bans a player's IP address.",
                "For severe cases only (ban evasion, etc.)",
            ),
            Command::new(
                "/reports",
                "Views player-submitted reports.",
                "To handle player reports",
            ),
            Command::new(
                "/modmode",
                "Toggles moderation mode.",
                "When actively moderating",
            ),
            Command::new(
                "/libertybans kick <Player> <Reason>",
                "Kicks a player from the server.",
                "For temporary removal (not punishment)",
            ),
            Command::new(
                "/gamemode <Mode>",
                "Changes your gamemode.",
                "For moderation and building purposes",
            ),
        ]))
}

fn punishments() -> ContentSection {
    ContentSection::new("punishments", "Punishments", Icon::Gavel)
        .with_description("Guidelines for issuing punishments")
        .with_sub_section(SubSection::new("Chat Offenses").with_table(vec![
            PunishmentRow::new(
                "Spam",
                "Repeatedly sending similar messages",
                "\"Hi\" x10, copy-pasting",
                "Warn → 15m → 30m → 1h → 6h → 1d",
            ),
            PunishmentRow::new(
                "Flooding",
                "Filling chat with nonsense",
                "Random letters, long repeated text",
                "Warn → 30m → 1h → 3h → 6h → 1d",
            ),
            PunishmentRow::new(
                "Swearing",
                "Excessive or targeted profanity",
                "Foul language",
                "Warn → 30m → 1h → 3h → 6h → 1d",
            ),
            PunishmentRow::new(
                "Disrespect",
                "Targeted harassment or staff disrespect",
                "Personal attacks",
                "Warn → 15m → 30m → 1h → 6h → 1w",
            ),
            PunishmentRow::new(
                "Racism/Hate",
                "Racial slurs or hate speech",
                "Slurs, discrimination",
                "7d → 30d → Perm mute/ban",
            ),
        ]))
        .with_sub_section(SubSection::new("Gameplay Offenses").with_table(vec![
            PunishmentRow::new(
                "Hacking",
                "Using unauthorized modifications",
                "Kill aura, fly hacks",
                "14d → 30d → 45d → Perm ban",
            ),
            PunishmentRow::new(
                "Exploiting",
                "Abusing bugs for advantage",
                "Dupes, item exploits",
                "Item removal + 14d → 30d + wipe → Perm",
            ),
            PunishmentRow::new(
                "Doxxing/DDOS",
                "Sharing personal information",
                "IP addresses, real names",
                "Perm IP ban + report",
            ),
            PunishmentRow::new(
                "Chargebacks",
                "Reversing store payments",
                "Disputing PayPal",
                "Blacklist + perm ban",
            ),
            PunishmentRow::new(
                "Scamming",
                "Fraudulent in-game deals",
                "Scamming items",
                "Item return + 14d → 30d → 45d",
            ),
        ]))
}

fn discord() -> ContentSection {
    ContentSection::new("discord", "Discord", Icon::MessageSquare)
        .with_description("Discord server rules and commands")
        .with_sub_section(SubSection::new("Chat Offenses (Mute or Ban)").with_list([
            "Spamming (repeating messages unnecessarily)",
            "Character spam (12+ repeated characters)",
            "Excessive use of caps (12+ capital letters)",
            "Inappropriate language or behavior",
            "Advertising other servers or services",
            "Racism or hate speech",
            "Encouraging or glorifying self-harm or death",
            "Promoting spam in chat",
            "Disrespecting staff members",
        ]))
        .with_sub_section(SubSection::new("Gameplay Offenses (Ban)").with_list([
            "Using hacked clients or unfair mods for PvE",
            "Ban evasion using alternate accounts",
            "Engaging in real-life (IRL) trading",
            "DDoS or doxing threats or actions (zero tolerance)",
            "Attempting or completing chargebacks",
        ]))
        .with_sub_section(SubSection::new("Bot Commands").with_commands(vec![
            Command::new(
                "!bsinfo",
                "General server information.",
                "When new players ask basic questions",
            ),
            Command::new(
                "!support",
                "How to get support.",
                "Directing players to proper channels",
            ),
            Command::new(
                "!apply",
                "Staff application info.",
                "When players ask about joining staff",
            ),
            Command::new(
                "!bug",
                "Bug reporting guide.",
                "When players find and report bugs",
            ),
            Command::new("!ip", "Server connection info.", "Quickly provide server IP"),
            Command::new("!beta", "Beta testing info.", "Questions about beta access"),
        ]))
}
