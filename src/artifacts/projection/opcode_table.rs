use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Hat,
    Stack,
    /// One nested stack, closed by `end`
    C,
    /// Two nested stacks separated by `else`, closed by `end`
    IfElse,
    Cap,
    Reporter,
    Boolean,
}

/// Rendering template of an opcode.
///
/// `{NAME}` is replaced by the input or field called `NAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub shape: Shape,
    pub text: &'static str,
}

const fn t(shape: Shape, text: &'static str) -> Template {
    Template { shape, text }
}

pub static TEMPLATES: phf::Map<&'static str, Template> = phf_map! {
    // events
    "event_whenflagclicked" => t(Shape::Hat, "when green flag clicked"),
    "event_whenkeypressed" => t(Shape::Hat, "when {KEY_OPTION} key pressed"),
    "event_whenthisspriteclicked" => t(Shape::Hat, "when this sprite clicked"),
    "event_whenstageclicked" => t(Shape::Hat, "when stage clicked"),
    "event_whenbackdropswitchesto" => t(Shape::Hat, "when backdrop switches to {BACKDROP}"),
    "event_whengreaterthan" => t(Shape::Hat, "when {WHENGREATERTHANMENU} > {VALUE}"),
    "event_whenbroadcastreceived" => t(Shape::Hat, "when I receive {BROADCAST_OPTION}"),
    "event_broadcast" => t(Shape::Stack, "broadcast {BROADCAST_INPUT}"),
    "event_broadcastandwait" => t(Shape::Stack, "broadcast {BROADCAST_INPUT} and wait"),
    // motion
    "motion_movesteps" => t(Shape::Stack, "move {STEPS} steps"),
    "motion_turnright" => t(Shape::Stack, "turn right {DEGREES} degrees"),
    "motion_turnleft" => t(Shape::Stack, "turn left {DEGREES} degrees"),
    "motion_goto" => t(Shape::Stack, "go to {TO}"),
    "motion_gotoxy" => t(Shape::Stack, "go to x: {X} y: {Y}"),
    "motion_glidesecstoxy" => t(Shape::Stack, "glide {SECS} secs to x: {X} y: {Y}"),
    "motion_pointindirection" => t(Shape::Stack, "point in direction {DIRECTION}"),
    "motion_pointtowards" => t(Shape::Stack, "point towards {TOWARDS}"),
    "motion_changexby" => t(Shape::Stack, "change x by {DX}"),
    "motion_setx" => t(Shape::Stack, "set x to {X}"),
    "motion_changeyby" => t(Shape::Stack, "change y by {DY}"),
    "motion_sety" => t(Shape::Stack, "set y to {Y}"),
    "motion_ifonedgebounce" => t(Shape::Stack, "if on edge, bounce"),
    "motion_xposition" => t(Shape::Reporter, "x position"),
    "motion_yposition" => t(Shape::Reporter, "y position"),
    "motion_direction" => t(Shape::Reporter, "direction"),
    // looks
    "looks_say" => t(Shape::Stack, "say {MESSAGE}"),
    "looks_sayforsecs" => t(Shape::Stack, "say {MESSAGE} for {SECS} seconds"),
    "looks_think" => t(Shape::Stack, "think {MESSAGE}"),
    "looks_switchcostumeto" => t(Shape::Stack, "switch costume to {COSTUME}"),
    "looks_nextcostume" => t(Shape::Stack, "next costume"),
    "looks_switchbackdropto" => t(Shape::Stack, "switch backdrop to {BACKDROP}"),
    "looks_changesizeby" => t(Shape::Stack, "change size by {CHANGE}"),
    "looks_setsizeto" => t(Shape::Stack, "set size to {SIZE} %"),
    "looks_show" => t(Shape::Stack, "show"),
    "looks_hide" => t(Shape::Stack, "hide"),
    "looks_costumenumbername" => t(Shape::Reporter, "costume {NUMBER_NAME}"),
    "looks_size" => t(Shape::Reporter, "size"),
    // sound
    "sound_play" => t(Shape::Stack, "start sound {SOUND_MENU}"),
    "sound_playuntildone" => t(Shape::Stack, "play sound {SOUND_MENU} until done"),
    "sound_stopallsounds" => t(Shape::Stack, "stop all sounds"),
    // control
    "control_wait" => t(Shape::Stack, "wait {DURATION} seconds"),
    "control_repeat" => t(Shape::C, "repeat {TIMES}"),
    "control_forever" => t(Shape::C, "forever"),
    "control_if" => t(Shape::C, "if {CONDITION} then"),
    "control_if_else" => t(Shape::IfElse, "if {CONDITION} then"),
    "control_wait_until" => t(Shape::Stack, "wait until {CONDITION}"),
    "control_repeat_until" => t(Shape::C, "repeat until {CONDITION}"),
    "control_stop" => t(Shape::Cap, "stop {STOP_OPTION}"),
    "control_start_as_clone" => t(Shape::Hat, "when I start as a clone"),
    "control_create_clone_of" => t(Shape::Stack, "create clone of {CLONE_OPTION}"),
    "control_delete_this_clone" => t(Shape::Cap, "delete this clone"),
    // sensing
    "sensing_touchingobject" => t(Shape::Boolean, "touching {TOUCHINGOBJECTMENU}?"),
    "sensing_keypressed" => t(Shape::Boolean, "key {KEY_OPTION} pressed?"),
    "sensing_mousedown" => t(Shape::Boolean, "mouse down?"),
    "sensing_askandwait" => t(Shape::Stack, "ask {QUESTION} and wait"),
    "sensing_answer" => t(Shape::Reporter, "answer"),
    "sensing_mousex" => t(Shape::Reporter, "mouse x"),
    "sensing_mousey" => t(Shape::Reporter, "mouse y"),
    "sensing_timer" => t(Shape::Reporter, "timer"),
    "sensing_resettimer" => t(Shape::Stack, "reset timer"),
    // operators
    "operator_add" => t(Shape::Reporter, "{NUM1} + {NUM2}"),
    "operator_subtract" => t(Shape::Reporter, "{NUM1} - {NUM2}"),
    "operator_multiply" => t(Shape::Reporter, "{NUM1} * {NUM2}"),
    "operator_divide" => t(Shape::Reporter, "{NUM1} / {NUM2}"),
    "operator_random" => t(Shape::Reporter, "pick random {FROM} to {TO}"),
    "operator_gt" => t(Shape::Boolean, "{OPERAND1} > {OPERAND2}"),
    "operator_lt" => t(Shape::Boolean, "{OPERAND1} < {OPERAND2}"),
    "operator_equals" => t(Shape::Boolean, "{OPERAND1} = {OPERAND2}"),
    "operator_and" => t(Shape::Boolean, "{OPERAND1} and {OPERAND2}"),
    "operator_or" => t(Shape::Boolean, "{OPERAND1} or {OPERAND2}"),
    "operator_not" => t(Shape::Boolean, "not {OPERAND}"),
    "operator_join" => t(Shape::Reporter, "join {STRING1} {STRING2}"),
    "operator_mod" => t(Shape::Reporter, "{NUM1} mod {NUM2}"),
    "operator_round" => t(Shape::Reporter, "round {NUM}"),
    // data
    "data_setvariableto" => t(Shape::Stack, "set {VARIABLE} to {VALUE}"),
    "data_changevariableby" => t(Shape::Stack, "change {VARIABLE} by {VALUE}"),
    "data_showvariable" => t(Shape::Stack, "show variable {VARIABLE}"),
    "data_hidevariable" => t(Shape::Stack, "hide variable {VARIABLE}"),
    "data_addtolist" => t(Shape::Stack, "add {ITEM} to {LIST}"),
    "data_deleteoflist" => t(Shape::Stack, "delete {INDEX} of {LIST}"),
    "data_deletealloflist" => t(Shape::Stack, "delete all of {LIST}"),
    "data_itemoflist" => t(Shape::Reporter, "item {INDEX} of {LIST}"),
    "data_lengthoflist" => t(Shape::Reporter, "length of {LIST}"),
    "data_listcontainsitem" => t(Shape::Boolean, "{LIST} contains {ITEM}?"),
    // custom blocks
    "procedures_definition" => t(Shape::Hat, "define {custom_block}"),
    "argument_reporter_string_number" => t(Shape::Reporter, "{VALUE}"),
    "argument_reporter_boolean" => t(Shape::Boolean, "{VALUE}"),
};

pub fn lookup(opcode: &str) -> Option<&'static Template> {
    TEMPLATES.get(opcode)
}
