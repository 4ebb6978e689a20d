//! Chinese display names for clubs and competitions.

/// Display name of the tracked club. It is not looked up, the feed only ever
/// names the opponent.
pub const TRACKED_TEAM_DISPLAY_NAME: &str = "阿森纳";

/// Returns the Chinese display name for a canonical English club name.
///
/// Matching is exact and case-sensitive. Unknown names pass through unchanged.
///
/// # Examples
/// ```
/// use redlens::data_fetcher::teams::translate_team;
///
/// assert_eq!(translate_team("Arsenal"), "阿森纳");
/// assert_eq!(translate_team("Tottenham Hotspur"), "托特纳姆热刺");
/// assert_eq!(translate_team("Unknown FC"), "Unknown FC");
/// ```
pub fn translate_team(name: &str) -> String {
    lookup_team(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string())
}

/// Raw table lookup behind [`translate_team`].
pub fn lookup_team(name: &str) -> Option<&'static str> {
    let translated = match name {
        // Premier League
        "Arsenal" => "阿森纳",
        "Aston Villa" => "阿斯顿维拉",
        "Bournemouth" => "伯恩茅斯",
        "Brentford" => "布伦特福德",
        "Brighton & Hove Albion" => "布莱顿",
        "Burnley" => "伯恩利",
        "Chelsea" => "切尔西",
        "Crystal Palace" => "水晶宫",
        "Everton" => "埃弗顿",
        "Fulham" => "富勒姆",
        "Leeds United" => "利兹联",
        "Leicester City" => "莱斯特城",
        "Liverpool" => "利物浦",
        "Luton Town" => "卢顿",
        "Manchester City" => "曼城",
        "Manchester United" => "曼联",
        "Newcastle United" => "纽卡斯尔联",
        "Nottingham Forest" => "诺丁汉森林",
        "Sheffield United" => "谢菲尔德联",
        "Southampton" => "南安普顿",
        "Tottenham Hotspur" => "托特纳姆热刺",
        "West Ham United" => "西汉姆联",
        "Wolverhampton Wanderers" | "Wolves" => "狼队",

        // English Football League
        "Ipswich Town" => "伊普斯维奇",
        "Norwich City" => "诺维奇",
        "Watford" => "沃特福德",
        "West Bromwich Albion" => "西布朗",
        "Middlesbrough" => "米德尔斯堡",
        "Coventry City" => "考文垂",
        "Sunderland" => "桑德兰",
        "Blackburn Rovers" => "布莱克本",
        "Hull City" => "赫尔城",
        "Preston North End" => "普雷斯顿",
        "Bristol City" => "布里斯托尔城",
        "Cardiff City" => "加的夫城",
        "Swansea City" => "斯旺西",
        "Stoke City" => "斯托克城",
        "QPR" | "Queens Park Rangers" => "女王公园巡游者",
        "Birmingham City" => "伯明翰",
        "Huddersfield Town" => "哈德斯菲尔德",
        "Rotherham United" => "罗瑟勒姆",
        "Millwall" => "米尔沃尔",
        "Plymouth Argyle" => "普利茅斯",
        "Sheffield Wednesday" => "谢周三",
        "Portsmouth" => "朴茨茅斯",
        "Derby County" => "德比郡",
        "Bolton Wanderers" => "博尔顿",
        "Barnsley" => "巴恩斯利",
        "Charlton Athletic" => "查尔顿",
        "Reading" => "雷丁",
        "Wigan Athletic" => "威根竞技",
        "Blackpool" => "布莱克浦",
        "Peterborough United" => "彼得堡联",
        "Oxford United" => "牛津联",
        "Lincoln City" => "林肯城",
        "Port Vale" => "韦尔港",
        "Shrewsbury Town" => "什鲁斯伯里",
        "Exeter City" => "埃克塞特城",
        "Wycombe Wanderers" => "威科姆",
        "Leyton Orient" => "莱顿东方",
        "Wrexham" => "雷克瑟姆",

        // Spain
        "Real Madrid" => "皇家马德里",
        "FC Barcelona" | "Barcelona" => "巴塞罗那",
        "Atletico Madrid" => "马德里竞技",
        "Sevilla" => "塞维利亚",
        "Real Sociedad" => "皇家社会",
        "Villarreal" => "比利亚雷亚尔",
        "Real Betis" => "皇家贝蒂斯",
        "Athletic Club" => "毕尔巴鄂竞技",
        "Girona" => "赫罗纳",
        "Valencia" => "瓦伦西亚",

        // Germany
        "Bayern Munich" => "拜仁慕尼黑",
        "Borussia Dortmund" => "多特蒙德",
        "RB Leipzig" => "莱比锡红牛",
        "Bayer Leverkusen" => "勒沃库森",
        "Eintracht Frankfurt" => "法兰克福",
        "Wolfsburg" => "沃尔夫斯堡",
        "Stuttgart" => "斯图加特",
        "Borussia Monchengladbach" => "门兴格拉德巴赫",

        // Italy
        "Inter Milan" => "国际米兰",
        "AC Milan" | "Milan" => "AC米兰",
        "Juventus" => "尤文图斯",
        "Napoli" => "那不勒斯",
        "Roma" => "罗马",
        "Lazio" => "拉齐奥",
        "Atalanta" => "亚特兰大",
        "Fiorentina" => "佛罗伦萨",
        "Bologna" => "博洛尼亚",

        // France
        "Paris Saint-Germain" | "PSG" => "巴黎圣日耳曼",
        "Monaco" => "摩纳哥",
        "Lyon" => "里昂",
        "Marseille" => "马赛",
        "Lens" => "朗斯",
        "Lille" => "里尔",
        "Nice" => "尼斯",
        "Rennes" => "雷恩",

        // Rest of Europe
        "Benfica" => "本菲卡",
        "Porto" => "波尔图",
        "Sporting CP" => "葡萄牙体育",
        "Braga" => "布拉加",
        "Ajax" => "阿贾克斯",
        "PSV Eindhoven" => "埃因霍温",
        "Feyenoord" => "费耶诺德",
        "Celtic" => "凯尔特人",
        "Rangers" => "流浪者",
        "Shakhtar Donetsk" => "顿涅茨克矿工",
        "Dynamo Kyiv" => "基辅迪纳摩",
        "Galatasaray" => "加拉塔萨雷",
        "Fenerbahce" => "费内巴切",
        "Besiktas" => "贝西克塔斯",
        "Red Bull Salzburg" => "萨尔茨堡红牛",
        "Slavia Prague" => "布拉格斯拉维亚",
        "Sparta Prague" => "布拉格斯巴达",
        "Viktoria Plzen" => "比尔森胜利",
        "Olympiacos" => "奥林匹亚科斯",
        "Panathinaikos" => "帕纳辛奈科斯",
        "PAOK" => "PAOK萨洛尼卡",
        "AEK Athens" => "雅典AEK",
        "Club Brugge" => "布鲁日",
        "Anderlecht" => "安德莱赫特",
        "Genk" => "根克",
        "Union Saint-Gilloise" => "圣吉罗斯联合",
        "Kairat" => "凯拉特",
        "Young Boys" => "伯尔尼年轻人",
        "FC Zurich" => "苏黎世",
        "Basel" => "巴塞尔",
        "Dinamo Zagreb" => "萨格勒布迪纳摩",
        "Copenhagen" => "哥本哈根",
        "Midtjylland" => "中日德兰",

        _ => return None,
    };
    Some(translated)
}

/// Short Chinese name for the competitions the feed carries.
/// Anything else is shown as published.
pub fn competition_display_name(competition: &str) -> String {
    match competition {
        "Premier League" => "英超",
        "UEFA Champions League" => "欧冠",
        "FA Cup" => "足总杯",
        "League Cup" => "联赛杯",
        "Community Shield" => "社区盾",
        "Friendly" => "友谊赛",
        other => other,
    }
    .to_string()
}
