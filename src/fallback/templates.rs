// Pre-written answers served when the completion provider is unavailable.

pub(super) const REPL_INTRO: &str = "**Remote Pilot License (RePL) - Your Path to Commercial Drone Flying**

**What is RePL?**
The Remote Pilot License (RePL) is your official CASA certification that allows you to operate drones commercially in Australia. Without it, you can only fly recreationally.

**Requirements & Process:**

**Age & Prerequisites:**
• Must be at least 16 years old
• No prior aviation experience needed
• Good understanding of English (for safety communications)
• Basic understanding of meteorology and airspace

**Training Components:**
1. **Theory Training** (20-30 hours)
   - Aviation law and regulations
   - Meteorology basics
   - Aerodynamics and drone systems
   - Human factors and safety management
   - Navigation and flight planning

2. **Practical Training** (5-10 hours minimum)
   - Pre-flight checks and procedures
   - Basic flight maneuvers
   - Emergency procedures
   - Advanced handling techniques

3. **Assessment**
   - Written examination (CASA-approved)
   - Practical flight test with certified instructor
   - Logbook verification

**Investment Details:**
• **Cost Range:** $2,000 - $4,000 AUD
  - Budget providers: $2,000 - $2,500
  - Mid-range: $2,500 - $3,200
  - Premium courses: $3,200 - $4,000

• **Timeline:** 2-4 weeks (intensive) or 6-12 weeks (part-time)

**What's Included:**
✓ All training materials and manuals
✓ Online theory modules access
✓ Practical flight time with instructor
✓ Drone equipment usage during training
✓ CASA examination fees (usually)
✓ Certificate upon completion";

pub(super) const REPL_LOCATION: &str = "**Training Locations:**
To provide specific training center recommendations, could you let me know which city you're in or closest to? Major training hubs include:
• Sydney & NSW region
• Melbourne & VIC region
• Brisbane & QLD region
• Perth & WA region
• Adelaide & SA region

This helps me recommend the most convenient and relevant options for you.";

pub(super) const REPL_OUTRO: &str = "**After You Get Your RePL:**
• Operate drones up to 25kg commercially
• Fly within standard operating conditions
• Work for drone service companies
• Start your own drone business (with ReOC)
• Upgrade to advanced ratings (night ops, BVLOS)

**Official CASA Information:**
🌐 https://www.casa.gov.au/drones

**Ready to Start?**
I can connect you with a DroneCareerPro expert who can provide personalized course recommendations and answer specific questions about your situation.";

pub(super) const REOC: &str = "**Remote Operator's Certificate (ReOC) - Operating Your Drone Business**

**What is ReOC?**
The Remote Operator's Certificate (ReOC) is CASA's approval that allows you to operate a commercial drone business in Australia. While RePL lets you fly commercially, ReOC lets you run drone operations as a business and employ other pilots.

**You NEED ReOC if you:**
• Want to operate your own drone services business
• Plan to employ other drone pilots
• Need to conduct operations outside standard conditions
• Want to fly beyond visual line of sight (BVLOS)

**You DON'T need ReOC if you:**
• Work as an employee for a company with ReOC
• Fly recreationally only

**ReOC Requirements:**
• Must hold a valid RePL first
• Operations Manual with standard and emergency procedures
• Safety Management System (SMS)
• Public liability insurance (minimum $10 million recommended)
• A nominated Chief Remote Pilot

**Application Process:**
• Stage 1: Preparation (1-2 months)
• Stage 2: Application to CASA (4-8 weeks)
• Stage 3: Assessment and possible site inspection (4-8 weeks)
• Stage 4: Approval and certificate issuance (2-4 weeks)

**Total Timeline:** 3-6 months on average

**Investment:**
• **DIY Approach:** $5,000 - $8,000
• **Consultant-Assisted:** $10,000 - $15,000
• **Full-Service Packages:** $15,000 - $25,000+

**Common Mistakes to Avoid:**
• Incomplete operations manuals
• Inadequate SMS documentation
• Underestimating preparation time
• Insufficient insurance coverage

**Official CASA Information:**
🌐 https://www.casa.gov.au/drones

**Expert Guidance Available:**
The ReOC process can be complex. I can connect you with specialists who have guided operators through the certification process.";

pub(super) const TRAINING_INTRO: &str = "**Australian Drone Training Providers - Comprehensive Comparison**

**1. DroneCareerPro**
📍 **Locations:** Melbourne, Sydney, Brisbane, Perth
💰 **Price:** $2,995 (all-inclusive)
• Comprehensive online theory modules (20+ hours)
• In-person practical training (2-3 days)
• CASA examination fees included
• Post-course support and mentorship
**Best For:** Those seeking comprehensive career support and industry connections

---

**2. Global Drone Solutions**
📍 **Locations:** Sydney, Melbourne, Brisbane
💰 **Price:** $2,750
• 3-day intensive course format
• Online modules for pre-study
• Job placement assistance
• Equipment purchase discounts
**Best For:** Those wanting quick certification and job placement support

---

**3. Australian Drone Academy**
📍 **Locations:** All capital cities
💰 **Price:** $2,200 - $3,500 (varies by location)
• Weekend and weekday courses
• Exam registration assistance
**Best For:** Budget-conscious students or those needing flexible schedules

---

**4. Drone Training Australia**
📍 **Locations:** Regional centers + capital cities
💰 **Price:** $2,400 - $3,200
• Regional access for rural students
• Agricultural drone specialization
**Best For:** Regional students or those interested in agricultural applications

---

**Choosing the Right Provider:**
1. **Location & Convenience:** travel time, training environment, accommodation
2. **Course Format:** intensive (3-5 days) or extended (2-4 weeks)
3. **Post-Course Support:** job placement, mentorship, equipment advice
4. **Specializations:** aerial photography, inspection, agriculture, surveying";

pub(super) const TRAINING_LOCATION: &str = "**Location-Specific Recommendation:**
You mentioned a location. To give you the most relevant recommendation, which city are you in or near? I can provide specific training centers, upcoming course dates, and local market insights for your area.";

pub(super) const TRAINING_NO_LOCATION: &str = "**Need Location-Specific Info?**
Let me know which city you're in or planning to train in, and I'll provide:
• Nearby training centers with upcoming dates
• Local drone industry insights
• Regional career opportunities
• Best value options for your area";

pub(super) const TRAINING_OUTRO: &str = "**All providers are CASA-approved and will qualify you for RePL certification.**

**Official CASA Training Information:**
🌐 https://www.casa.gov.au/drones

**Ready to Choose?**
I can connect you with a DroneCareerPro advisor who can provide personalized recommendations based on your location, budget, career goals and prior experience.";

pub(super) const CAREER_INTRO: &str = "**Drone Career Opportunities in Australia - Complete Guide**

**Industry Overview:**
The Australian drone industry is growing fast, with the market expected to reach $14.5 billion by 2030. Demand for qualified RePL holders is outpacing supply.

**Career Pathways & Salary Ranges:**
• **Aerial Photography & Videography:** $50,000 - $150,000+ per year
• **Industrial Inspection:** $70,000 - $120,000+ per year
• **Surveying & Mapping:** $60,000 - $110,000+ per year
• **Agricultural Monitoring:** $55,000 - $95,000+ per year
• **Emergency Services:** $65,000 - $100,000+ per year
• **Environmental & Conservation:** $60,000 - $90,000 per year
• **Delivery & Logistics (Emerging):** $55,000 - $85,000 per year

**Entry-Level Strategy:**
Year 1: Gain RePL, build portfolio, freelance work ($40k-$60k)
Year 2: Specialize, get ReOC, establish client base ($60k-$80k)
Year 3+: Business growth or senior specialist role ($80k-$150k+)

**Geographic Opportunities:**";

pub(super) const CAREER_LOCATION: &str = "You mentioned a location. Let me know which city/region you're interested in, and I can provide specific local market insights and demand patterns.";

pub(super) const CAREER_NO_LOCATION: &str = "• **Sydney/Melbourne:** Highest concentration of work, most competitive
• **Brisbane/Perth:** Growing markets, good balance of opportunity and competition
• **Regional Centers:** Lower competition, agriculture and mining focus
• **Remote Areas:** Premium rates, project-based work";

pub(super) const CAREER_OUTRO: &str = "**Skills That Boost Earnings:**
• Advanced flying skills (BVLOS, night operations)
• Technical specializations (thermography, LiDAR)
• Post-processing expertise (editing, mapping software)
• Business management skills

**Starting Your Career:**
1. Get RePL certification (2-4 weeks)
2. Build initial portfolio (3-6 months)
3. Choose specialization based on interest
4. Network in your chosen industry
5. Consider ReOC for business operations

**Official CASA Career Information:**
🌐 https://www.casa.gov.au/drones

**Ready to Plan Your Path?**
I can connect you with a career advisor who can provide personalized guidance based on your background, location and goals.";

pub(super) const SAFETY: &str = "✅ **CASA Drone Safety Rules:**

📋 **Must Follow:**
- ✓ Keep drone in visual line of sight
- ✓ Fly below 120 meters (400 feet)
- ✓ Stay 30 meters away from people
- ✓ No flying over populated areas without authorization
- ✓ 5.5km restriction near airports
- ✓ No night flying without approval
- ✓ Respect privacy and property rights

🧠 **Pro tip:** Download the CASA drone app for airspace info!

🌐 **Full regulations:** https://www.casa.gov.au/drones

🤝 Questions about specific scenarios? Ask me!";

pub(super) const GENERAL: &str = "✅ I'm here to help with drone regulations, training, and careers in Australia!

🧠 **I can help you with:**
- RePL and ReOC licensing
- Training provider comparisons
- Career opportunities and salaries
- CASA safety rules
- Insurance requirements

🌐 **Official CASA website:** https://www.casa.gov.au/drones

🤝 What specific information would you like to know?";

pub(super) const CONTEXT_NOTE: &str = "📚 I have the latest information from CASA and training providers.";
