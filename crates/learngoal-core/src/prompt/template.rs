//! The fixed prompt text sent with every request.
//!
//! Both halves are kept byte-for-byte, including the leading newline, the
//! indentation and the whitespace-only lines. The learning targets are
//! inserted between them.

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that generates structured learning goals and section narratives for lesson planning.";

/// Everything before the insertion point, ending inside the `##INPUT##` block.
pub const USER_TEMPLATE_HEAD: &str = r#"
    ##CONTEXT##
    I'm developing clear learning goals and structured section narratives from provided learning targets.
    
    ##OBJECTIVE##
    1. **Learning Goals Generation**
       - Analyze all learning targets to identify:
         - Core skills being developed
         - Major concepts being taught
         - Expected final outcomes
         - Progression of complexity
       - Synthesize 2-3 broad goals that:
         - Start with action verbs
         - Encompass multiple targets
         - Focus on major outcomes
         - Are measurable
       - Format under the heading "**Learning Goals**" as bullet points.
    
    2. **Section Narrative Generation**
       - Follow a structured four-paragraph format under the heading "**Section Narrative**":
         
         **Paragraph 1: Introduction**
         - Begin with "In this section, students..."
         - Introduce the main concept/skill
         - Describe the starting point
         - Reference initial tools or approaches
         
         **Paragraph 2: Early Development**
         - Describe how students begin working with the concept
         - Explain initial strategies or representations
         - Show progression to slightly more complex ideas
         - Connect to specific mathematical notation or vocabulary
         
         **Paragraph 3: Continued Development**
         - Begin with "Throughout the section..."
         - Describe how students expand their understanding
         - Include key connections or relationships
         - Reference specific mathematical practices or skills
         
         **Paragraph 4: Advanced Application**
         - Begin with "As students become more confident..."
         - Describe culminating work
         - Show how skills come together
         - Reference any real-world connections or extensions
         
    3. **Style and Formatting Guidelines**
       - Use present tense, third-person narration
       - Avoid technical jargon unless necessary
       - Use clear transitional phrases
       - No teacher guidance, bullet points, or special formatting except bold titles
    
    ##INPUT##
    Learning Targets:
    "#;

/// Everything after the insertion point.
pub const USER_TEMPLATE_TAIL: &str = r#"
    
    ##SAMPLE OUTPUT FORMAT##
    **Learning Goals**
    * [First broad learning goal]
    * [Second broad learning goal]
    
    **Section Narrative**
    In this section, students...
    [Four structured paragraphs following the defined format]
    "#;
