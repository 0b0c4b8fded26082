//! 字段与题目标签的映射表
//!
//! 键是数据集列名，值是该题在页面上可见标签中应包含的文本片段。
//! 映射在整个运行期间不可变；顺序对应表单页面的预期顺序，
//! 但正确性不依赖顺序（每一页都会扫描全部字段）

/// 字段 → 题目标签文本 的固定映射
pub static QUESTION_MAP: &[(&str, &str)] = &[
    // 第一部分：基本信息
    ("Gender", "What is your Gender"),
    ("Age", "What is your age"),
    ("Batch", "Bachelor’s Batch"),
    ("Grad_Year", "graduating year"),
    ("Background", "educational background"),
    ("Major", "Bachelor’s major"),
    ("Specialization", "Which Bachelor’s program specialization"),
    ("University", "Which university did you attend?"),
    ("City", "city your university is located"),
    ("Student_Type", "During your university studies"),
    ("Selection_Reason", "How did you select your university"),
    ("Job_Domain", "current job domain"),
    ("Job_Role", "job role/designation"),
    ("Salary", "monthly salary range"),
    ("Satisfaction", "How satisfied are you with your current career"),
    ("Status", "employment status"),
    // 第二部分：评价与反馈
    ("Job_Support_Rating", "support in helping you secure a job"),
    ("Job_Support_Explain", "Job placement support"),
    ("Job_Ready", "Did your university help you become job-ready"),
    ("Faculty_Rating", "Faculty & teaching quality"),
    ("Faculty_Explain", "explain your rating.(Faculty)"),
    ("Resources_Rating", "learning resources"),
    ("Resources_Explain", "explain your rating.(learning resources)"),
    ("Labs_Rating", "laboratory/practical facilities"),
    ("Labs_Explain", "explain your rating.(labs)"),
    ("Sports_Rating", "Sports facilities"),
    ("Sports_Explain", "explain your rating.(Sports)"),
    ("Cafe_Rating", "Cafeteria / Food services"),
    ("Cafe_Explain", "explain your rating.(Cafeteria)"),
    ("Hostel_Rating", "Hostel facilities"),
    ("Hostel_Explain", "explain your rating.(Hostels)"),
    ("Events_Rating", "Events & co-curricular activities"),
    ("Events_Explain", "explain your rating.(Events)"),
    ("Campus_Rating", "Campus environment"),
    ("Campus_Explain", "explain your rating.(Environment)"),
    ("Mgmt_Rating", "terms management"),
    ("Mgmt_Explain", "explain your rating.(Management)"),
    ("Overall_Rating", "Overall student satisfaction"),
    ("Overall_Explain", "Overall student satisfaction"),
    ("Hardships", "What hardships did you face"),
    ("Lessons", "What did you learn from those"),
    ("Recommend", "recommend your university"),
    ("Recommend_Why", "explain Why or Why not"),
    // 第三部分：性格测评
    ("Repairing_Things", "repairing mechanical things"),
    ("Working_Outdoors", "working outdoors"),
    ("Building_Things", "building things with my hands"),
    ("Fixing_Appliances", "fix household appliances"),
    ("Operating_Machines", "operating different machines"),
    ("Building_Models", "building practical models"),
    ("Organizing_Info", "organizing messy information"),
    ("Handling_Records", "handling records"),
    ("Balancing_Budgets", "balancing budgets"),
    ("Meeting_Records", "records of meetings"),
    ("Solving_Problems", "solving difficult problems"),
    ("Experimenting", "experimenting to see what happens"),
    ("Investigating_Causes", "investigating causes"),
    ("Logic_Discussion", "discussions based on logic"),
    ("Analyzing_Graphs", "analyzing graphs"),
    ("Systematic_Schedules", "systematic schedules"),
    ("Finding_Errors", "find errors in reports"),
    ("Music_Activities", "music-related activities"),
    ("Designing_Posters", "designing posters"),
    ("Writing_Plays", "writing or performing plays"),
    ("Acting_Films", "acting or writing films"),
    ("Creative_Ideas", "new creative ideas"),
    ("Teaching_Others", "teaching and guiding others"),
    ("Helping_People", "help other people"),
    ("Volunteer_Work", "volunteer work"),
    ("Charity_Activities", "organizing charity"),
    ("Including_Others", "include others"),
    ("Training_Others", "training other"),
    ("Taking_Lead", "taking the lead"),
    ("Presenting_Ideas", "present and promote"),
    ("Persuading_People", "persuading people"),
    ("Leadership_Goal", "become a leader"),
    ("Taking_Risks", "take risks"),
    ("Competitive_Situations", "competitive situations"),
    // 第四部分：结尾反馈
    ("Final_Comments", "Anything that we missed"),
    ("Platform_Wish", "wish you had a platform"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn field_identifiers_are_unique() {
        let mut seen = HashSet::new();
        for (field, _) in QUESTION_MAP {
            assert!(seen.insert(field), "重复的字段标识: {}", field);
        }
    }

    #[test]
    fn labels_are_non_empty() {
        for (field, label) in QUESTION_MAP {
            assert!(!label.is_empty(), "字段 {} 的标签为空", field);
        }
    }
}
