//! 答题卡内联样式和脚本

/// 评分控件默认隐藏；打印时隐藏按钮、强制显示评分控件
pub const INLINE_CSS: &str = r#"
body { font-family: Arial, sans-serif; padding: 20px; background-color: #fff; color: #000; }
h2 { text-align: center; margin-bottom: 14px; }
.toolbar { margin-bottom: 10px; }
.toolbar .field { margin-left: 14px; }
#model { width: 80px; }
#totalscore { width: 60px; }
.section-header { font-weight: bold; margin-top: 18px; border-bottom: 1px solid #000; padding-bottom: 5px; }
.qgrid { column-count: 2; column-gap: 18px; margin-top: 10px; }
.qbox { display: block; margin-bottom: 8px; break-inside: avoid; }
.qbox b { display: inline-block; width: 28px; }
.answer, .correct-answer { width: 120px; height: 22px; margin-left: 6px; border: 1px solid #000; padding: 3px; box-sizing: border-box; vertical-align: middle; }
.checkbox { display: none; width: 20px; height: 20px; margin-left: 8px; vertical-align: middle; }
.correct-answer { display: none; }
button { margin-right: 8px; padding: 6px 12px; font-size: 13px; cursor: pointer; border-radius: 4px; }
#evalToggle { background: #007bff; color: #fff; border: none; }
#printBtn { background: #28a745; color: #fff; border: none; }
@media print {
    #evalToggle, #printBtn { display: none !important; }
    .checkbox, .correct-answer { display: inline-block !important; }
}
"#;

/// 评分模式：切换显示、按复选框隐藏标准答案、统计总分
pub const INLINE_JS: &str = r#"
let evalMode = false;

function toggleEvaluation() {
    evalMode = !evalMode;
    document.getElementById('evalToggle').innerText =
        evalMode ? 'Disable Evaluation Mode' : 'Enable Evaluation Mode';
    document.querySelectorAll('.checkbox').forEach(function (chk) {
        chk.style.display = evalMode ? 'inline-block' : 'none';
        syncCorrectAnswer(chk);
    });
}

function syncCorrectAnswer(chk) {
    const ca = document.getElementById('ca' + chk.dataset.question);
    if (!ca) return;
    ca.style.display = (evalMode && !chk.checked) ? 'inline-block' : 'none';
}

function onCheckboxChange(n) {
    const chk = document.getElementById('chk' + n);
    if (chk) syncCorrectAnswer(chk);
    updateScore();
}

function updateScore() {
    document.getElementById('totalscore').value =
        document.querySelectorAll('.checkbox:checked').length;
}
"#;
