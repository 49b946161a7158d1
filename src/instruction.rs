/// A decoded Befunge-93 instruction.
///
/// Every byte that means something outside string mode decodes to exactly
/// one variant; anything else is an unknown instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `0`-`9`: push the digit's value.
    Digit(u8),
    /// `@`
    Exit,
    /// ` `
    Blank,
    /// `\`
    Swap,
    /// `:`
    Dup,
    /// `$`
    Pop,
    /// `,`
    OutputAscii,
    /// `.`
    OutputInt,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `!`
    Not,
    /// `` ` ``
    Greater,
    /// `>`
    Right,
    /// `<`
    Left,
    /// `^`
    Up,
    /// `v`
    Down,
    /// `?`
    Random,
    /// `_`
    HorizontalIf,
    /// `|`
    VerticalIf,
    /// `g`
    Get,
    /// `p`
    Put,
    /// `&`
    InputInt,
    /// `~`
    InputChar,
    /// `#`
    Bridge,
    /// `"`
    StringMode,
}

impl Instruction {
    pub fn decode(byte: u8) -> Option<Self> {
        use Instruction::*;
        let instr = match byte {
            b'0'..=b'9' => Digit(byte - b'0'),
            b'@' => Exit,
            b' ' => Blank,
            b'\\' => Swap,
            b':' => Dup,
            b'$' => Pop,
            b',' => OutputAscii,
            b'.' => OutputInt,
            b'+' => Add,
            b'-' => Subtract,
            b'*' => Multiply,
            b'/' => Divide,
            b'%' => Modulo,
            b'!' => Not,
            b'`' => Greater,
            b'>' => Right,
            b'<' => Left,
            b'^' => Up,
            b'v' => Down,
            b'?' => Random,
            b'_' => HorizontalIf,
            b'|' => VerticalIf,
            b'g' => Get,
            b'p' => Put,
            b'&' => InputInt,
            b'~' => InputChar,
            b'#' => Bridge,
            b'"' => StringMode,
            _ => return None,
        };
        Some(instr)
    }
}
